//! CheckMembershipHandler - Query handler for checking a scanned membership id.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::MemberId;
use crate::domain::membership::{ActiveSemester, MembershipError, MembershipStatus};
use crate::ports::RosterReader;

/// Query to check a membership id as scanned.
#[derive(Debug, Clone)]
pub struct CheckMembershipQuery {
    /// Raw id from the QR code; normalized by the handler.
    pub raw_id: Option<String>,
}

impl CheckMembershipQuery {
    pub fn new(raw_id: impl Into<String>) -> Self {
        Self {
            raw_id: Some(raw_id.into()),
        }
    }
}

/// Handler for membership checks.
///
/// A missing or blank id is rejected before the roster is consulted.
/// An unknown id is a normal result with `valid == false`.
pub struct CheckMembershipHandler {
    reader: Arc<dyn RosterReader>,
    active_semester: ActiveSemester,
}

impl CheckMembershipHandler {
    pub fn new(reader: Arc<dyn RosterReader>, active_semester: ActiveSemester) -> Self {
        Self {
            reader,
            active_semester,
        }
    }

    pub async fn handle(
        &self,
        query: CheckMembershipQuery,
    ) -> Result<MembershipStatus, MembershipError> {
        let raw_id = query.raw_id.ok_or_else(MembershipError::missing_id)?;
        let member_id = MemberId::new(raw_id)?;

        let member = self.reader.find_member(&member_id).await?;

        let status = MembershipStatus::evaluate(member.as_ref(), &self.active_semester);

        debug!(
            member_id = %member_id,
            valid = status.valid,
            active = status.active,
            active_semester = %self.active_semester,
            "Checked membership"
        );

        Ok(status)
    }
}
