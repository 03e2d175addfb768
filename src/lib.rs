//! Member Check - Membership QR verification service
//!
//! Looks up a scanned membership id in a static roster and reports whether
//! the member's dues are paid for the active semester.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
