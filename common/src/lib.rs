//! Shared types and client-side logic for the Club Soytechno admin dashboard.
//!
//! Everything here is pure: the records decoded from the loyalty API, the
//! filtering/aggregation/export helpers the list views run over an already
//! fetched page, and the endpoint builder both the browser client and the
//! gateway use.

pub mod api;
pub mod format;
pub mod model;
pub mod requests;
pub mod rules;
pub mod view;
