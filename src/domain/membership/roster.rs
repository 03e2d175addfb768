//! The membership roster: normalized member id to member record.
//!
//! Built once from the roster file and read-only afterwards.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::MemberId;

use super::payment::MemberRecord;

/// Immutable lookup table of members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: HashMap<MemberId, MemberRecord>,
}

impl Roster {
    /// Builds a roster from entries in order.
    ///
    /// When an id appears more than once the first entry is kept.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MemberId, MemberRecord)>,
    {
        let mut members = HashMap::new();
        for (id, record) in entries {
            if members.contains_key(&id) {
                tracing::warn!(member_id = %id, "Duplicate roster entry after normalization, keeping first");
                continue;
            }
            members.insert(id, record);
        }
        Self { members }
    }

    /// Looks up a member by normalized id.
    pub fn get(&self, id: &MemberId) -> Option<&MemberRecord> {
        self.members.get(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Reads a roster object (`{"<raw id>": {...}, ...}`) in document order,
/// normalizing keys as it goes. Keys that are blank after normalization are
/// skipped.
impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RosterVisitor)
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of membership ids to member records")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((raw_id, record)) = access.next_entry::<String, MemberRecord>()? {
            match MemberId::new(&raw_id) {
                Ok(id) => entries.push((id, record)),
                Err(_) => tracing::warn!(raw_id = %raw_id, "Skipping roster entry with blank id"),
            }
        }

        Ok(Roster::from_entries(entries))
    }
}
