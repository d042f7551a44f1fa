//! Dashboard-facing HTTP surface.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{AppState, router};
