//! Top-level application router.
//!
//! Merges the check API and the scan page, then applies the cross-cutting
//! tower-http layers configured in [`ServerConfig`].

use std::time::Duration;

use axum::Router;
use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::check::{check_router, CheckAppState};
use super::scan::scan_router;

/// Build the full application router.
///
/// # Routes
///
/// - `GET /` - Redirect to `/scan`
/// - `GET /scan` - Scanner page
/// - `GET /api/check?id=...` - Membership check
pub fn app_router(state: CheckAppState, server: &ServerConfig) -> Router {
    let router = check_router()
        .with_state(state)
        .merge(scan_router::<()>())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                ))),
        );

    match cors_layer(server) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS layer allowing `GET` from the configured origins, if any.
fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::roster::InMemoryRosterReader;
    use crate::domain::membership::ActiveSemester;

    fn test_state() -> CheckAppState {
        CheckAppState::new(
            Arc::new(InMemoryRosterReader::default()),
            ActiveSemester::default(),
        )
    }

    #[tokio::test]
    async fn serves_api_and_scan_page() {
        let app = app_router(test_state(), &ServerConfig::default());

        let api = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/check?id=anyone")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(api.status(), StatusCode::OK);

        let root = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(root.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router(test_state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let server = ServerConfig {
            cors_origins: Some("https://scan.example.org".to_string()),
            ..Default::default()
        };
        let app = app_router(test_state(), &server);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/check?id=x")
                    .header(header::ORIGIN, "https://scan.example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://scan.example.org"
        );
    }

    #[test]
    fn no_cors_layer_without_origins() {
        assert!(cors_layer(&ServerConfig::default()).is_none());
    }
}
