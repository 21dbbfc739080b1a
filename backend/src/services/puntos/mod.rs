//! # Points routes
//!
//! Forwards the customer-centric `/api/puntos` endpoints: the quick points
//! lookup and the paginated list of customers ready to redeem.

mod customer;
mod ready;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/puntos";

/// Configures the `/api/puntos` scope.
///
/// *   **`GET /cliente/{cedula}`**: points snapshot (`PointsSummary`).
/// *   **`GET /listos-canje?page=&limit=`**: customers at or above the
///     redemption threshold (`ReadyCustomersPage`).
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/cliente/{cedula}", get().to(customer::process))
        .route("/listos-canje", get().to(ready::process))
}
