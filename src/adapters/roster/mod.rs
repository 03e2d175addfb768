//! Roster Adapters
//!
//! Loading the roster file and serving lookups from it.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::roster::{load_roster, InMemoryRosterReader};
//!
//! let roster = load_roster("data/members.json").await?;
//! let reader = InMemoryRosterReader::new(roster);
//! ```

mod file_roster;
mod in_memory;

pub use file_roster::{load_roster, RosterFormat, RosterLoadError};
pub use in_memory::InMemoryRosterReader;
