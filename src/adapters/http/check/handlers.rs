//! HTTP handlers for the membership check endpoint.
//!
//! These handlers connect Axum routes to the application layer query handler.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::membership::{CheckMembershipHandler, CheckMembershipQuery};
use crate::domain::membership::{ActiveSemester, MembershipError};
use crate::ports::RosterReader;

use super::dto::{CheckErrorResponse, CheckParams, CheckResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the check endpoint.
///
/// Cloned for each request; the roster reader is Arc-wrapped.
#[derive(Clone)]
pub struct CheckAppState {
    pub roster_reader: Arc<dyn RosterReader>,
    pub active_semester: ActiveSemester,
}

impl CheckAppState {
    pub fn new(roster_reader: Arc<dyn RosterReader>, active_semester: ActiveSemester) -> Self {
        Self {
            roster_reader,
            active_semester,
        }
    }

    pub fn check_membership_handler(&self) -> CheckMembershipHandler {
        CheckMembershipHandler::new(self.roster_reader.clone(), self.active_semester.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/check?id=... - Check a scanned membership id
///
/// The query is read as raw pairs so a repeated `id` resolves to its first
/// value instead of a rejection.
pub async fn check_membership(
    State(state): State<CheckAppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let Query(pairs) = query?;
    let params = CheckParams::from_pairs(pairs);

    let handler = state.check_membership_handler();
    let query = CheckMembershipQuery { raw_id: params.id };

    let status = handler.handle(query).await?;

    Ok(Json(CheckResponse::from(status)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts membership errors to HTTP responses.
///
/// Every variant renders the `{"valid": false, "error": ...}` body.
#[derive(Debug)]
pub enum MembershipApiError {
    Membership(MembershipError),
    InvalidQuery(QueryRejection),
}

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self::Membership(err)
    }
}

impl From<QueryRejection> for MembershipApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection)
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            Self::Membership(err @ MembershipError::MissingId) => {
                tracing::debug!(code = %err.code(), "Rejected membership check");
                (StatusCode::BAD_REQUEST, err.message())
            }
            Self::Membership(err @ MembershipError::Infrastructure(cause)) => {
                tracing::error!(code = %err.code(), "Membership check failed: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
            Self::InvalidQuery(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, "Invalid query string".to_string())
            }
        };

        (status, Json(CheckErrorResponse::new(message))).into_response()
    }
}
