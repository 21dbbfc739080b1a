use crate::model::tier::Tier;
use serde::{Deserialize, Serialize};

/// Points snapshot of one customer, as returned by the points lookups and the
/// "ready for redemption" listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsSummary {
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nivel")]
    pub tier: Tier,
    #[serde(rename = "puntos_totales", default)]
    pub total_points: u64,
    #[serde(rename = "puntos_vigentes", default)]
    pub valid_points: u64,
    #[serde(rename = "puntos_listos_canje", default)]
    pub ready_points: u64,
    #[serde(rename = "dolares_canjeables", default)]
    pub redeemable_amount: f64,
}

/// Envelope of `GET /api/puntos/listos-canje`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadyCustomersPage {
    pub total: u64,
    #[serde(rename = "clientes")]
    pub customers: Vec<PointsSummary>,
}

/// Envelope of `GET /api/users/listos-canje/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadyUsersPage {
    pub total: u64,
    pub users: Vec<PointsSummary>,
}

impl PointsSummary {
    fn sample(id: &str, name: &str, tier: Tier, points: [u64; 3], amount: f64) -> Self {
        Self {
            national_id: id.to_string(),
            name: name.to_string(),
            tier,
            total_points: points[0],
            valid_points: points[1],
            ready_points: points[2],
            redeemable_amount: amount,
        }
    }
}

impl ReadyCustomersPage {
    /// Illustrative rows the redemption view shows when the API is unreachable.
    ///
    /// Callers must flag these as sample data on screen; they are never mixed
    /// with live rows.
    pub fn sample() -> Self {
        let customers = vec![
            PointsSummary::sample("V-12345678", "Juan Pérez", Tier::GigaBytes, [4200, 3800, 3500], 70.0),
            PointsSummary::sample("V-87654321", "María García", Tier::MegaBytes, [1500, 1200, 1000], 20.0),
            PointsSummary::sample("V-11223344", "Carlos López", Tier::TeraBytes, [12000, 8500, 8500], 170.0),
            PointsSummary::sample("V-55667788", "Ana Rodríguez", Tier::GigaBytes, [2800, 2500, 2500], 50.0),
            PointsSummary::sample("V-99887766", "Pedro Martínez", Tier::MegaBytes, [980, 750, 500], 10.0),
        ];
        Self {
            total: customers.len() as u64,
            customers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_ready_envelopes() {
        let row = r#"{"cedula": "V-1", "nombre": "Ana", "nivel": "MegaBytes",
            "puntos_totales": 900, "puntos_vigentes": 600, "puntos_listos_canje": 500,
            "dolares_canjeables": 10.0}"#;

        let customers: ReadyCustomersPage =
            serde_json::from_str(&format!(r#"{{"total": 7, "clientes": [{row}]}}"#)).unwrap();
        let users: ReadyUsersPage =
            serde_json::from_str(&format!(r#"{{"total": 7, "users": [{row}]}}"#)).unwrap();

        assert_eq!(customers.total, 7);
        assert_eq!(customers.customers, users.users);
        assert_eq!(users.users[0].ready_points, 500);
    }

    #[test]
    fn sample_total_matches_rows() {
        let sample = ReadyCustomersPage::sample();
        assert_eq!(sample.total, 5);
        assert!(sample.customers.iter().all(|c| c.ready_points >= 500));
    }
}
