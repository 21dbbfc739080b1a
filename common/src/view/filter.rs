//! Client-side narrowing of an already fetched page.
//!
//! The list views never re-query the API when the search box or the tier
//! select change; they run [`RowFilter`] over the rows they hold. The filter
//! therefore only narrows the current page, not the full dataset.

use crate::model::{PointsSummary, Tier, UserRecord};

/// Read access the list views need from a row, whatever endpoint produced it.
pub trait CustomerRow {
    fn name(&self) -> &str;
    fn national_id(&self) -> &str;
    fn tier(&self) -> Tier;
    fn total_points(&self) -> u64;
    fn valid_points(&self) -> u64;
    fn ready_points(&self) -> u64;
    fn redeemable_amount(&self) -> f64;

    /// Lifetime spend; rows from the points endpoints do not carry it.
    fn total_spent(&self) -> f64 {
        0.0
    }
}

impl CustomerRow for UserRecord {
    fn name(&self) -> &str {
        &self.name
    }
    fn national_id(&self) -> &str {
        &self.national_id
    }
    fn tier(&self) -> Tier {
        self.tier
    }
    fn total_points(&self) -> u64 {
        self.total_points
    }
    fn valid_points(&self) -> u64 {
        self.valid_points
    }
    fn ready_points(&self) -> u64 {
        self.ready_points
    }
    fn redeemable_amount(&self) -> f64 {
        self.redeemable_amount
    }
    fn total_spent(&self) -> f64 {
        self.total_spent
    }
}

impl CustomerRow for PointsSummary {
    fn name(&self) -> &str {
        &self.name
    }
    fn national_id(&self) -> &str {
        &self.national_id
    }
    fn tier(&self) -> Tier {
        self.tier
    }
    fn total_points(&self) -> u64 {
        self.total_points
    }
    fn valid_points(&self) -> u64 {
        self.valid_points
    }
    fn ready_points(&self) -> u64 {
        self.ready_points
    }
    fn redeemable_amount(&self) -> f64 {
        self.redeemable_amount
    }
}

/// Value of the "all tiers" option in the tier `<select>`.
pub const ALL_TIERS_VALUE: &str = "todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    /// Maps a `<select>` value; anything that is not a tier name means "all".
    pub fn from_select_value(value: &str) -> Self {
        Tier::from_name(value).map_or(TierFilter::All, TierFilter::Only)
    }

    pub fn select_value(&self) -> &'static str {
        match self {
            TierFilter::All => ALL_TIERS_VALUE,
            TierFilter::Only(tier) => tier.as_str(),
        }
    }

    pub fn accepts(&self, tier: Tier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(wanted) => *wanted == tier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowFilter {
    pub search: String,
    pub tier: TierFilter,
}

impl RowFilter {
    /// A row matches when its name or identifier contains the search text,
    /// ignoring case, and the tier filter accepts its tier.
    pub fn matches<R: CustomerRow>(&self, row: &R) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = row.name().to_lowercase().contains(&needle)
            || row.national_id().to_lowercase().contains(&needle);
        text_match && self.tier.accepts(row.tier())
    }

    pub fn apply<'a, R: CustomerRow>(&self, rows: &'a [R]) -> Vec<&'a R> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}
