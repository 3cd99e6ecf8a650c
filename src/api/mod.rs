//! HTTP API module for the leave entitlement engine.
//!
//! This module provides the REST API endpoint for computing paid-leave
//! entitlement reports under the French congés payés regime.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EntitlementRequest;
pub use response::ApiError;
pub use state::AppState;
