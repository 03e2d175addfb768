//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RosterReader` - Member lookups against the loaded roster

mod roster_reader;

pub use roster_reader::RosterReader;
