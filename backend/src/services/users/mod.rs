//! # Users routes
//!
//! Gateway side of the loyalty API's `/api/users` surface. Every handler
//! forwards to the same path upstream, decodes the success body into its
//! `common::model` record and relays any error response untouched.

mod get;
mod list;
mod points;
mod ready;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/users";

/// Configures the `/api/users` scope.
///
/// *   **`GET /?page=&limit=`**: one page of full customer records (`UsersPage`).
/// *   **`GET /listos-canje/?page=&limit=`**: users with redeemable points
///     (`ReadyUsersPage`). Registered before `/{cedula}` so the literal
///     segment wins.
/// *   **`GET /puntos/{cedula}`**: points snapshot of one user (`PointsSummary`).
/// *   **`GET /{cedula}`**: full record of one user, with transactions (`UserRecord`).
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", get().to(list::process))
        .route("/listos-canje/", get().to(ready::process))
        .route("/puntos/{cedula}", get().to(points::process))
        .route("/{cedula}", get().to(get::process))
}
