//! # Problem Files
//!
//! A [`ProblemFile`] wraps a [`BeamProblem`] with a small metadata header so
//! problems can be stored and exchanged as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! ProblemFile
//! ├── meta: ProblemMetadata (version, label, author, timestamps)
//! └── problem: BeamProblem (length, supports, loads, section, include_shear)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{BeamProblem, Supports};
//! use beam_core::loads::Load;
//! use beam_core::problem::ProblemFile;
//! use beam_core::profile::SectionProfile;
//!
//! let section = SectionProfile::new(1.0e10, 3.0e5, 15.0, -15.0);
//! let problem = BeamProblem::new(1000.0, Supports::Clamped, section)
//!     .with_load(Load::point(-500.0, 1000.0));
//! let file = ProblemFile::new("Cantilever C-1", "Jane Engineer", problem);
//!
//! let json = serde_json::to_string_pretty(&file).unwrap();
//! assert!(json.contains("Cantilever C-1"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::BeamProblem;

/// Current schema version for problem files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root container of a problem file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemFile {
    /// File metadata (version, label, author)
    pub meta: ProblemMetadata,

    /// The beam problem itself
    pub problem: BeamProblem,
}

impl ProblemFile {
    /// Wrap a problem with fresh metadata.
    ///
    /// # Arguments
    ///
    /// * `label` - Short name of the problem (e.g., "Table top T-2")
    /// * `author` - Who set the problem up
    /// * `problem` - The problem to store
    pub fn new(label: impl Into<String>, author: impl Into<String>, problem: BeamProblem) -> Self {
        let now = Utc::now();
        ProblemFile {
            meta: ProblemMetadata {
                version: SCHEMA_VERSION.to_string(),
                label: label.into(),
                author: author.into(),
                created: now,
                modified: now,
            },
            problem,
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

/// Metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Short name of the problem
    #[serde(default)]
    pub label: String,

    /// Who set the problem up
    #[serde(default)]
    pub author: String,

    /// When the file was created
    pub created: DateTime<Utc>,

    /// When the file was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::Supports;
    use crate::loads::Load;
    use crate::profile::SectionProfile;

    fn test_problem() -> BeamProblem {
        let section = SectionProfile::new(4.7e6, 2.3e6, 1.5, -1.5);
        BeamProblem::new(800.0, Supports::simple(6.0, 780.0), section)
            .with_load(Load::point(-20.0, 400.0))
    }

    #[test]
    fn test_problem_file_creation() {
        let file = ProblemFile::new("Strip S-1", "Jane Engineer", test_problem());
        assert_eq!(file.meta.label, "Strip S-1");
        assert_eq!(file.meta.version, SCHEMA_VERSION);
        assert_eq!(file.meta.created, file.meta.modified);
    }

    #[test]
    fn test_problem_file_serialization() {
        let file = ProblemFile::new("Strip S-1", "Jane Engineer", test_problem());
        let json = serde_json::to_string_pretty(&file).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("\"Simple\""));

        let roundtrip: ProblemFile = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, file);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut file = ProblemFile::new("Strip S-1", "", test_problem());
        let created = file.meta.created;
        file.touch();
        assert!(file.meta.modified >= created);
    }
}
