//! File-based roster loading.
//!
//! Reads the roster dataset from disk once at start-up. The format is
//! chosen by file extension: `.json` or `.yaml`/`.yml`.
//!
//! ```json
//! {
//!   "bsa-0042": {
//!     "name": "Rahim Uddin",
//!     "paymentHistory": [{ "semester": "Fall 2025", "paid": true }]
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

use crate::domain::membership::Roster;

/// Errors that can occur while loading the roster file.
#[derive(Debug, Error)]
pub enum RosterLoadError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported roster file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Supported roster encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RosterFormat::Json),
            "yaml" | "yml" => Some(RosterFormat::Yaml),
            _ => None,
        }
    }

    /// Parse roster contents in this format.
    pub fn parse(&self, contents: &str) -> Result<Roster, String> {
        match self {
            RosterFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            RosterFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Load and normalize the roster at `path`.
///
/// # Errors
///
/// Returns `RosterLoadError` if the file cannot be read, has an unknown
/// extension, or is not a map of ids to member records.
pub async fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, RosterLoadError> {
    let path = path.as_ref();

    let format = RosterFormat::from_path(path)
        .ok_or_else(|| RosterLoadError::UnsupportedFormat(path.to_path_buf()))?;

    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| RosterLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let roster = format.parse(&contents).map_err(|reason| RosterLoadError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    if roster.is_empty() {
        tracing::warn!(path = %path.display(), "Roster has no members; every id will be invalid");
    } else {
        tracing::info!(
            path = %path.display(),
            members = roster.len(),
            "Loaded membership roster"
        );
    }

    Ok(roster)
}
