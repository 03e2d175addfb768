//! Semester labels and their total order.
//!
//! A semester label has the form `"<Term> <Year>"`, e.g. `"Spring 2026"`.
//! Payment histories are not guaranteed to be sorted, so the most recent
//! payment is found by comparing [`semester_rank`] values.
//!
//! Ranking never fails: labels that cannot be read rank `0` and sort below
//! every well-formed semester.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Integer sort key for a semester label: `year * 10 + term`.
pub type SemesterRank = i64;

/// Semester used when no active semester is configured.
pub const DEFAULT_ACTIVE_SEMESTER: &str = "Fall 2025";

/// Academic term within a year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Spring,
    Summer,
    Fall,
}

impl Term {
    /// Parses a term name. Matching is exact (`"Fall"`, not `"fall"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Spring" => Some(Term::Spring),
            "Summer" => Some(Term::Summer),
            "Fall" => Some(Term::Fall),
            _ => None,
        }
    }

    /// Position of the term inside its year (Spring = 1 .. Fall = 3).
    pub fn rank(&self) -> SemesterRank {
        match self {
            Term::Spring => 1,
            Term::Summer => 2,
            Term::Fall => 3,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Fall => "Fall",
        };
        write!(f, "{}", s)
    }
}

/// Computes the sort rank of a semester label.
///
/// The label is split on its first space. The year is read from the leading
/// digits of the second part; an unknown term contributes nothing, so
/// `"Winter 2025"` ranks `20250`. Labels without a readable year
/// (`""`, `"Fall"`, `"Fall TBD"`) rank `0`. A signed year is not read
/// either, so `"Fall -2025"` and `"Fall +2025"` also rank `0`.
pub fn semester_rank(label: &str) -> SemesterRank {
    let Some((term, rest)) = label.split_once(' ') else {
        return 0;
    };

    let Some(year) = leading_year(rest) else {
        return 0;
    };

    let term_rank = Term::parse(term).map(|t| t.rank()).unwrap_or(0);

    year.checked_mul(10)
        .and_then(|y| y.checked_add(term_rank))
        .unwrap_or(0)
}

fn leading_year(s: &str) -> Option<SemesterRank> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    s[..end].parse().ok()
}

/// The semester currently considered "current" for dues purposes.
///
/// Fixed for the lifetime of the process and passed explicitly to the
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSemester(String);

impl ActiveSemester {
    /// Creates an active semester from a label, trimming whitespace.
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValidationError> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("active_semester"));
        }
        Ok(Self(label.to_string()))
    }

    /// Resolves a configured setting, falling back to
    /// [`DEFAULT_ACTIVE_SEMESTER`] when unset or blank.
    pub fn from_setting(setting: Option<&str>) -> Self {
        setting
            .and_then(|s| Self::new(s).ok())
            .unwrap_or_default()
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `label` is exactly this semester.
    ///
    /// No rank comparison: a later semester does not match.
    pub fn matches(&self, label: &str) -> bool {
        self.0 == label
    }
}

impl Default for ActiveSemester {
    fn default() -> Self {
        Self(DEFAULT_ACTIVE_SEMESTER.to_string())
    }
}

impl fmt::Display for ActiveSemester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
