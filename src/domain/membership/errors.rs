//! Membership-specific error types.
//!
//! An id missing from the roster is not an error; it evaluates to an
//! invalid [`MembershipStatus`](super::MembershipStatus).
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MissingId | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// No membership id was supplied, or it was blank.
    MissingId,

    /// Infrastructure error.
    Infrastructure(String),
}

impl MembershipError {
    pub fn missing_id() -> Self {
        MembershipError::MissingId
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::MissingId => ErrorCode::EmptyField,
            MembershipError::Infrastructure(_) => ErrorCode::RosterUnavailable,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::MissingId => "Missing ID".to_string(),
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(_: ValidationError) -> Self {
        MembershipError::MissingId
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        MembershipError::Infrastructure(err.to_string())
    }
}
