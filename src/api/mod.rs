//! HTTP API for the OEE engine.
//!
//! This module contains the axum router, handlers, shared state and
//! error-response mapping for the presentation boundary.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
