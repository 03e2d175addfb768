//! HTTP adapter for the scan page.
//!
//! - `GET /` - Redirects to `/scan`
//! - `GET /scan` - Camera QR scanner that calls `/api/check`

use axum::response::{Html, Redirect};
use axum::{routing::get, Router};

/// The scanner page, embedded at compile time.
pub const SCAN_PAGE: &str = include_str!("../../../../static/scan.html");

/// GET /scan - Serve the scanner page
pub async fn scan_page() -> Html<&'static str> {
    Html(SCAN_PAGE)
}

/// GET / - Temporary redirect to the scanner
pub async fn redirect_to_scan() -> Redirect {
    Redirect::temporary("/scan")
}

/// Create the scan page router.
///
/// Stateless, so it can be merged into a router with any state type.
pub fn scan_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(redirect_to_scan))
        .route("/scan", get(scan_page))
}
