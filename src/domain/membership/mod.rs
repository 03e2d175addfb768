//! Membership domain module.
//!
//! Decides whether a member's dues are current for the active semester.
//!
//! # Module Structure
//!
//! - `semester` - Semester ranking and the active semester value
//! - `payment` - MemberRecord and PaymentEvent
//! - `roster` - Normalized, read-only member lookup table
//! - `status` - MembershipStatus evaluation
//! - `errors` - MembershipError

mod errors;
mod payment;
mod roster;
mod semester;
mod status;

pub use errors::MembershipError;
pub use payment::{MemberRecord, PaymentEvent};
pub use roster::Roster;
pub use semester::{semester_rank, ActiveSemester, SemesterRank, Term, DEFAULT_ACTIVE_SEMESTER};
pub use status::MembershipStatus;
