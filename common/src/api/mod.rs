pub mod endpoints;
pub mod error;

pub use endpoints::Endpoints;
pub use error::{extract_detail, ApiError};
