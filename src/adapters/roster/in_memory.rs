//! In-memory implementation of RosterReader.
//!
//! Wraps the roster loaded at start-up. The roster is never mutated, so it
//! is shared across request tasks without locking.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::{MemberRecord, Roster};
use crate::ports::RosterReader;

/// Roster reader backed by an immutable in-memory roster.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosterReader {
    roster: Arc<Roster>,
}

impl InMemoryRosterReader {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}

#[async_trait]
impl RosterReader for InMemoryRosterReader {
    async fn find_member(&self, id: &MemberId) -> Result<Option<MemberRecord>, DomainError> {
        Ok(self.roster.get(id).cloned())
    }
}
