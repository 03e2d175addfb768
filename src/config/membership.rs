//! Membership check configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::membership::ActiveSemester;

/// Membership check configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipConfig {
    /// Semester whose dues count as current, e.g. "Fall 2025".
    /// Unset or blank falls back to the built-in default.
    pub active_semester: Option<String>,

    /// Path to the roster file (.json, .yaml or .yml)
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,
}

impl MembershipConfig {
    /// Resolve the active semester, applying the fallback.
    pub fn active_semester(&self) -> ActiveSemester {
        ActiveSemester::from_setting(self.active_semester.as_deref())
    }

    /// Validate membership configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.roster_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("membership.roster_path"));
        }
        Ok(())
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            active_semester: None,
            roster_path: default_roster_path(),
        }
    }
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("data/members.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::DEFAULT_ACTIVE_SEMESTER;

    #[test]
    fn test_membership_config_defaults() {
        let config = MembershipConfig::default();
        assert_eq!(config.roster_path, PathBuf::from("data/members.json"));
        assert_eq!(config.active_semester().as_str(), DEFAULT_ACTIVE_SEMESTER);
    }

    #[test]
    fn test_blank_active_semester_falls_back() {
        let config = MembershipConfig {
            active_semester: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.active_semester().as_str(), DEFAULT_ACTIVE_SEMESTER);
    }

    #[test]
    fn test_active_semester_is_trimmed() {
        let config = MembershipConfig {
            active_semester: Some(" Spring 2026 ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.active_semester().as_str(), "Spring 2026");
    }

    #[test]
    fn test_validation_empty_roster_path() {
        let config = MembershipConfig {
            roster_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{ "active_semester": "Summer 2026", "roster_path": "/srv/roster.yaml" }"#;
        let config: MembershipConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.active_semester().as_str(), "Summer 2026");
        assert_eq!(config.roster_path, PathBuf::from("/srv/roster.yaml"));
    }
}
