//! Membership handlers.
//!
//! ## Queries
//! - Check a scanned membership id against the roster

mod check_membership;

pub use check_membership::{CheckMembershipHandler, CheckMembershipQuery};
