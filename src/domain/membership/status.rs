//! Membership status evaluation.
//!
//! A member is *active* when their most recent payment (by semester rank)
//! is for exactly the active semester and is marked paid.

use super::payment::MemberRecord;
use super::semester::ActiveSemester;

/// Outcome of checking one membership id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipStatus {
    /// The id exists in the roster.
    pub valid: bool,

    /// Dues are paid for the active semester.
    pub active: bool,

    /// Display name, `None` when not found.
    pub name: Option<String>,

    /// Semester of the most recent payment event, paid or not.
    pub last_paid_semester: Option<String>,
}

impl MembershipStatus {
    /// Result for an id that is not in the roster.
    pub fn not_found() -> Self {
        Self {
            valid: false,
            active: false,
            name: None,
            last_paid_semester: None,
        }
    }

    /// Evaluates a known member against the active semester.
    pub fn for_member(member: &MemberRecord, active_semester: &ActiveSemester) -> Self {
        let last_payment = member.last_payment();

        let active = last_payment
            .map(|payment| payment.paid && active_semester.matches(&payment.semester))
            .unwrap_or(false);

        Self {
            valid: true,
            active,
            name: Some(member.name.clone()),
            last_paid_semester: last_payment.map(|payment| payment.semester.clone()),
        }
    }

    /// Evaluates the result of a roster lookup for `active_semester`.
    ///
    /// Pure: no I/O and no hidden state, so repeated calls agree.
    pub fn evaluate(member: Option<&MemberRecord>, active_semester: &ActiveSemester) -> Self {
        match member {
            Some(member) => Self::for_member(member, active_semester),
            None => Self::not_found(),
        }
    }
}
