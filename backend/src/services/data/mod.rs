//! # Data ingestion routes
//!
//! Only one endpoint lives here: the transaction file upload. The gateway
//! checks what it can without opening the file (a `file` part is present,
//! the extension is allowed, the size is within the configured limit, the
//! file is not empty) and then re-sends it to the loyalty API, which does
//! all parsing.

mod upload;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/data";

/// Configures the `/api/data` scope.
///
/// *   **`POST /upload`**: multipart body with a single `file` part
///     (`.csv`, `.xlsx` or `.xls`). Answers with the loyalty API's
///     `UploadResult`, or `{"detail"}` on rejection.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/upload", post().to(upload::process))
}
