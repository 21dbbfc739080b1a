use serde::{Deserialize, Serialize};
use std::fmt;

/// Loyalty tier (`nivel`) as decided by the loyalty API.
///
/// The dashboard never computes tier membership; it only orders and colors
/// what the backend already assigned. Declaration order is rank order, so the
/// derived `Ord` matches `TierInfo::rank`.
///
/// Deserializing an unknown tier name fails, which surfaces as a decode error
/// instead of a silently mis-rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Kilobytes,
    MegaBytes,
    GigaBytes,
    TeraBytes,
}

/// Static display metadata for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    /// Position in the four-stage progress indicator, 1 to 4.
    pub rank: u8,
    /// CSS class for the badge text.
    pub text_class: &'static str,
    /// CSS class for the badge background.
    pub bg_class: &'static str,
    pub description: &'static str,
}

/// Where a tier sits relative to a customer's current tier in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Current,
    Reached,
    Pending,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Kilobytes,
        Tier::MegaBytes,
        Tier::GigaBytes,
        Tier::TeraBytes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Kilobytes => "Kilobytes",
            Tier::MegaBytes => "MegaBytes",
            Tier::GigaBytes => "GigaBytes",
            Tier::TeraBytes => "TeraBytes",
        }
    }

    /// Parses the exact wire name. Used by the tier `<select>` in the list views.
    pub fn from_name(name: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.as_str() == name)
    }

    pub fn info(&self) -> TierInfo {
        match self {
            Tier::Kilobytes => TierInfo {
                rank: 1,
                text_class: "tier-text-gray",
                bg_class: "tier-bg-gray",
                description: "Nivel Básico",
            },
            Tier::MegaBytes => TierInfo {
                rank: 2,
                text_class: "tier-text-blue",
                bg_class: "tier-bg-blue",
                description: "Nivel Intermedio",
            },
            Tier::GigaBytes => TierInfo {
                rank: 3,
                text_class: "tier-text-purple",
                bg_class: "tier-bg-purple",
                description: "Nivel Avanzado",
            },
            Tier::TeraBytes => TierInfo {
                rank: 4,
                text_class: "tier-text-amber",
                bg_class: "tier-bg-amber",
                description: "Nivel Pro",
            },
        }
    }

    pub fn rank(&self) -> u8 {
        self.info().rank
    }

    /// The four stages of the tier progress indicator for a customer at `self`.
    pub fn stages(&self) -> [(Tier, StageState); 4] {
        Tier::ALL.map(|tier| {
            let state = if tier == *self {
                StageState::Current
            } else if self.rank() >= tier.rank() {
                StageState::Reached
            } else {
                StageState::Pending
            };
            (tier, state)
        })
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<u8> = Tier::ALL.iter().map(Tier::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(Tier::Kilobytes < Tier::TeraBytes);
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_name(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::from_name("todos"), None);
        assert_eq!(Tier::from_name("kilobytes"), None);
    }

    #[test]
    fn unknown_tier_fails_to_decode() {
        let result = serde_json::from_str::<Tier>("\"PetaBytes\"");
        assert!(result.is_err());
    }

    #[test]
    fn stages_mark_current_and_reached_tiers() {
        let stages = Tier::GigaBytes.stages();
        let states: Vec<StageState> = stages.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            states,
            vec![
                StageState::Reached,
                StageState::Reached,
                StageState::Current,
                StageState::Pending
            ]
        );
        assert_eq!(Tier::Kilobytes.stages()[0].1, StageState::Current);
        assert_eq!(Tier::Kilobytes.stages()[1].1, StageState::Pending);
    }
}
