use crate::model::tier::Tier;
use serde::{Deserialize, Serialize};

/// A customer as returned by `/api/users/...`.
///
/// The lookup endpoint returns extra fields (`_id`, `fecha_registro`) that the
/// dashboard has no use for; serde ignores them. Dates arrive already
/// formatted by the backend (`dd/mm/yy HH:MM:SS`) and are shown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
    #[serde(rename = "nivel")]
    pub tier: Tier,
    #[serde(rename = "total_gastado", default)]
    pub total_spent: f64,
    #[serde(rename = "compras_totales", default)]
    pub purchase_count: u64,
    #[serde(rename = "puntos_totales", default)]
    pub total_points: u64,
    #[serde(rename = "puntos_vigentes", default)]
    pub valid_points: u64,
    #[serde(rename = "puntos_listos_canje", default)]
    pub ready_points: u64,
    #[serde(rename = "dolares_canjeables", default)]
    pub redeemable_amount: f64,
    #[serde(rename = "fecha_suscripcion", default)]
    pub subscribed_at: Option<String>,
    #[serde(rename = "ultima_actualizacion", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "transacciones", default)]
    pub transactions: Vec<TransactionSummary>,
}

/// Condensed transaction stored on the user document by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    #[serde(rename = "transaccion_id", default)]
    pub id: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "tienda")]
    pub store: String,
    #[serde(rename = "articulo")]
    pub item: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "puntos_generados")]
    pub points: i64,
}

/// Envelope of `GET /api/users/?page=&limit=`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UsersPage {
    pub total: u64,
    pub users: Vec<UserRecord>,
}
