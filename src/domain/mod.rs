//! Domain layer - pure business logic with no I/O.

pub mod foundation;
pub mod membership;
