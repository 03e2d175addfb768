//! HTTP adapter for the membership check endpoint.
//!
//! - `GET /api/check?id=...` - Dues status for a scanned membership id

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CheckAppState, MembershipApiError};
pub use routes::{check_router, check_routes};
