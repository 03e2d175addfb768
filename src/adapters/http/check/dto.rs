//! HTTP DTOs (Data Transfer Objects) for the membership check endpoint.
//!
//! Field names are camelCase to match what the scan page reads.

use crate::domain::membership::MembershipStatus;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /api/check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckParams {
    /// Raw membership id as scanned from the QR code.
    pub id: Option<String>,
}

impl CheckParams {
    /// Builds params from decoded query pairs.
    ///
    /// When `id` is repeated the first value wins; other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);
        Self { id }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Membership check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// The id is in the roster.
    pub valid: bool,
    /// Dues are paid for the active semester.
    pub active: bool,
    /// Member display name (null when not found).
    pub name: Option<String>,
    /// Semester of the most recent payment (null when none).
    pub last_paid_semester: Option<String>,
}

impl From<MembershipStatus> for CheckResponse {
    fn from(status: MembershipStatus) -> Self {
        Self {
            valid: status.valid,
            active: status.active,
            name: status.name,
            last_paid_semester: status.last_paid_semester,
        }
    }
}

/// Error body for the check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckErrorResponse {
    /// Always `false`.
    pub valid: bool,
    /// Human-readable error.
    pub error: String,
}

impl CheckErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn not_found_serializes_with_explicit_nulls() {
        let response = CheckResponse::from(MembershipStatus::not_found());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "valid": false,
                "active": false,
                "name": null,
                "lastPaidSemester": null
            })
        );
    }

    #[test]
    fn found_member_serializes_camel_case() {
        let response = CheckResponse {
            valid: true,
            active: true,
            name: Some("Rahim".to_string()),
            last_paid_semester: Some("Fall 2025".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["lastPaidSemester"], "Fall 2025");
        assert_eq!(value["name"], "Rahim");
    }

    #[test]
    fn error_response_shape() {
        let body = CheckErrorResponse::new("Missing ID");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "valid": false, "error": "Missing ID" })
        );
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn params_id_is_optional() {
        let params = CheckParams::from_pairs(pairs(&[("other", "1")]));
        assert!(params.id.is_none());
    }

    #[test]
    fn params_first_id_wins() {
        let params = CheckParams::from_pairs(pairs(&[("x", "1"), ("id", "bsa-1"), ("id", "bsa-2")]));
        assert_eq!(params.id.as_deref(), Some("bsa-1"));
    }

    #[test]
    fn params_keep_empty_first_id() {
        let params = CheckParams::from_pairs(pairs(&[("id", ""), ("id", "bsa-2")]));
        assert_eq!(params.id.as_deref(), Some(""));
    }
}
