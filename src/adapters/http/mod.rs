//! HTTP adapters - REST API and page implementations.

pub mod check;
pub mod router;
pub mod scan;

// Re-export key types for convenience
pub use check::{check_router, CheckAppState};
pub use router::app_router;
pub use scan::scan_router;
