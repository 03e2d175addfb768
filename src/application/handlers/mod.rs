//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod membership;

pub use membership::{CheckMembershipHandler, CheckMembershipQuery};
