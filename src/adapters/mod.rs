//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `roster` - Roster file loading and the in-memory roster reader
//! - `http` - Axum routes for the check API and scan page

pub mod http;
pub mod roster;

pub use roster::{load_roster, InMemoryRosterReader, RosterLoadError};
