//! Reduction of the two dashboard fetches into the overview cards.
//!
//! The overview reads one page of users and one page of redemption-ready
//! users, both at the largest page size the API serves. Counts come from the
//! envelope totals; sums and the tier breakdown only see the fetched rows.

use crate::model::{ReadyUsersPage, Tier, UserRecord, UsersPage};

/// Rows in the "latest customers" card.
pub const LATEST_USERS_SHOWN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierShare {
    pub tier: Tier,
    pub count: usize,
    /// Share of the fetched users, 0 to 100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_users: u64,
    pub total_points: u64,
    pub ready_users: u64,
    pub redeemable_amount: f64,
    /// One entry per tier, in rank order.
    pub tiers: Vec<TierShare>,
    pub latest_users: Vec<UserRecord>,
}

impl DashboardSummary {
    pub fn from_pages(users: &UsersPage, ready: &ReadyUsersPage) -> Self {
        let fetched = users.users.len();
        let tiers = Tier::ALL
            .into_iter()
            .map(|tier| {
                let count = users.users.iter().filter(|u| u.tier == tier).count();
                let percent = if fetched == 0 {
                    0.0
                } else {
                    count as f64 / fetched as f64 * 100.0
                };
                TierShare {
                    tier,
                    count,
                    percent,
                }
            })
            .collect();

        Self {
            total_users: users.total,
            total_points: users.users.iter().map(|u| u.total_points).sum(),
            ready_users: ready.total,
            redeemable_amount: ready.users.iter().map(|u| u.redeemable_amount).sum(),
            tiers,
            latest_users: users
                .users
                .iter()
                .take(LATEST_USERS_SHOWN)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::filter::fixtures::{summary, user};

    fn users_page() -> UsersPage {
        UsersPage {
            total: 250,
            users: vec![
                user("V-1", "Ana", Tier::Kilobytes, 100, 90.0),
                user("V-2", "Luis", Tier::MegaBytes, 800, 700.0),
                user("V-3", "Rosa", Tier::MegaBytes, 900, 850.0),
                user("V-4", "Pedro", Tier::TeraBytes, 9000, 9000.0),
                user("V-5", "Elena", Tier::Kilobytes, 50, 40.0),
                user("V-6", "Jorge", Tier::GigaBytes, 3000, 2900.0),
                user("V-7", "Marta", Tier::Kilobytes, 10, 10.0),
                user("V-8", "Iván", Tier::MegaBytes, 600, 590.0),
            ],
        }
    }

    #[test]
    fn counts_come_from_envelopes() {
        let ready = ReadyUsersPage {
            total: 42,
            users: vec![
                summary("V-2", "Luis", Tier::MegaBytes, 500, 10.0),
                summary("V-4", "Pedro", Tier::TeraBytes, 9000, 180.0),
            ],
        };
        let summary = DashboardSummary::from_pages(&users_page(), &ready);
        assert_eq!(summary.total_users, 250);
        assert_eq!(summary.ready_users, 42);
        assert_eq!(summary.redeemable_amount, 190.0);
        assert_eq!(summary.total_points, 14460);
    }

    #[test]
    fn tier_breakdown_covers_every_tier_in_order() {
        let summary = DashboardSummary::from_pages(&users_page(), &ReadyUsersPage::default());
        let tiers: Vec<_> = summary.tiers.iter().map(|t| t.tier).collect();
        assert_eq!(tiers, Tier::ALL.to_vec());

        let counts: Vec<_> = summary.tiers.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![3, 3, 1, 1]);
        assert_eq!(summary.tiers[0].percent, 37.5);
        assert_eq!(summary.tiers[3].percent, 12.5);
        let total: f64 = summary.tiers.iter().map(|t| t.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn latest_card_takes_first_five() {
        let summary = DashboardSummary::from_pages(&users_page(), &ReadyUsersPage::default());
        let ids: Vec<_> = summary
            .latest_users
            .iter()
            .map(|u| u.national_id.as_str())
            .collect();
        assert_eq!(ids, vec!["V-1", "V-2", "V-3", "V-4", "V-5"]);
    }

    #[test]
    fn empty_fetch_has_zero_shares() {
        let summary =
            DashboardSummary::from_pages(&UsersPage::default(), &ReadyUsersPage::default());
        assert!(summary.tiers.iter().all(|t| t.count == 0 && t.percent == 0.0));
        assert!(summary.latest_users.is_empty());
        assert_eq!(summary.redeemable_amount, 0.0);
    }
}
