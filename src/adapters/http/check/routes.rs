//! Axum router configuration for the membership check endpoint.

use axum::{routing::get, Router};

use super::handlers::{check_membership, CheckAppState};

/// Create the check API routes.
///
/// # Routes
///
/// - `GET /check?id=<membership id>` - Check dues status for a scanned id
pub fn check_routes() -> Router<CheckAppState> {
    Router::new().route("/check", get(check_membership))
}

/// Create the check module router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .merge(check_router())
///     .with_state(CheckAppState::new(reader, active_semester));
/// ```
pub fn check_router() -> Router<CheckAppState> {
    Router::new().nest("/api", check_routes())
}
