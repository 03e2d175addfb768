//! Roster reader port (read side of the member roster).
//!
//! The roster is loaded once and never written, so this is the only
//! roster port.
//!
//! # Example
//!
//! ```ignore
//! async fn member_name(reader: &dyn RosterReader, id: &MemberId) -> Option<String> {
//!     let record = reader.find_member(id).await.ok()??;
//!     Some(record.name)
//! }
//! ```

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::MemberRecord;
use async_trait::async_trait;

/// Reader port for member lookups.
#[async_trait]
pub trait RosterReader: Send + Sync {
    /// Find a member by normalized id.
    ///
    /// Returns `None` if the id is not in the roster.
    async fn find_member(&self, id: &MemberId) -> Result<Option<MemberRecord>, DomainError>;
}
