use crate::view::filter::CustomerRow;

/// KPI sums over the rows a list view currently shows.
///
/// Always built from the filtered rows, so the cards follow the search box
/// and tier select rather than the whole fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowTotals {
    pub rows: usize,
    pub total_points: u64,
    pub valid_points: u64,
    pub ready_points: u64,
    pub redeemable_amount: f64,
    pub total_spent: f64,
}

impl RowTotals {
    pub fn from_rows<'a, R, I>(rows: I) -> Self
    where
        R: CustomerRow + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        rows.into_iter().fold(RowTotals::default(), |mut acc, row| {
            acc.rows += 1;
            acc.total_points += row.total_points();
            acc.valid_points += row.valid_points();
            acc.ready_points += row.ready_points();
            acc.redeemable_amount += row.redeemable_amount();
            acc.total_spent += row.total_spent();
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;
    use crate::view::filter::fixtures::{page, user};
    use crate::view::filter::{RowFilter, TierFilter};

    #[test]
    fn sums_only_the_filtered_rows() {
        let rows = page();
        let filter = RowFilter {
            tier: TierFilter::Only(Tier::GigaBytes),
            ..Default::default()
        };
        let filtered = filter.apply(&rows);
        let totals = RowTotals::from_rows(filtered.iter().copied());

        assert_eq!(totals.rows, 2);
        assert_eq!(totals.redeemable_amount, 120.0);
        assert_eq!(totals.ready_points, 6000);

        let all = RowTotals::from_rows(&rows);
        assert_eq!(all.redeemable_amount, 310.0);
        assert_ne!(all, totals);
    }

    #[test]
    fn redeemable_sum_equals_arithmetic_sum() {
        let rows = page();
        let filter = RowFilter {
            search: "a".to_string(),
            ..Default::default()
        };
        let filtered = filter.apply(&rows);
        let expected: f64 = filtered.iter().map(|r| r.redeemable_amount).sum();
        let totals = RowTotals::from_rows(filtered.iter().copied());
        assert_eq!(totals.redeemable_amount, expected);
    }

    #[test]
    fn spend_comes_from_user_rows() {
        let users = vec![
            user("V-1", "Ana", Tier::Kilobytes, 100, 100.5),
            user("V-2", "Luis", Tier::MegaBytes, 900, 899.5),
        ];
        let totals = RowTotals::from_rows(&users);
        assert_eq!(totals.total_spent, 1000.0);
        assert_eq!(totals.total_points, 1000);
        assert_eq!(RowTotals::from_rows(&page()).total_spent, 0.0);
    }

    #[test]
    fn empty_selection_is_zero() {
        let rows: Vec<crate::model::PointsSummary> = Vec::new();
        assert_eq!(RowTotals::from_rows(&rows), RowTotals::default());
    }
}
