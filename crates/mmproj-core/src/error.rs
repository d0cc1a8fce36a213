//! Error types for planning, scaffolding and saving

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffold operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors raised while deriving a project plan from a path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The chosen path yields no project name (trailing separator, bare extension)
    #[error("Cannot derive a project name from '{0}'")]
    EmptyProjectName(String),
}

/// Errors reported by a host while persisting its document
#[derive(Debug, Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The host has nothing it can save
    #[error("No document to save: {0}")]
    NoDocument(String),

    /// Host-specific failure
    #[error("{0}")]
    Rejected(String),
}

/// Errors that terminate a save-with-folders run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Planning failed before touching the filesystem
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A folder could not be created
    #[error("Error creating folder '{}': {source}", path.display())]
    FolderCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The host failed to save the document
    #[error("Error saving document to '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: HostError,
    },
}

impl ScaffoldError {
    /// Get the error code for CLI/host responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Plan(PlanError::EmptyProjectName(_)) => "EMPTY_PROJECT_NAME",
            Self::FolderCreation { .. } => "FOLDER_CREATION_FAILED",
            Self::Save { .. } => "SAVE_FAILED",
        }
    }

    /// Path the failure is about, if any
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Plan(_) => None,
            Self::FolderCreation { path, .. } | Self::Save { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_folder_error_names_path_and_cause() {
        let err = ScaffoldError::FolderCreation {
            path: PathBuf::from("/tmp/Short/render"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/Short/render"));
        assert!(message.contains("permission denied"));
        assert_eq!(err.code(), "FOLDER_CREATION_FAILED");
    }

    #[test]
    fn test_save_error_is_distinct() {
        let err = ScaffoldError::Save {
            path: PathBuf::from("/tmp/Short/project/Short.blend"),
            source: HostError::Rejected("disk full".into()),
        };
        assert_eq!(err.code(), "SAVE_FAILED");
        assert!(err.to_string().starts_with("Error saving document"));
        assert_eq!(
            err.path(),
            Some(&PathBuf::from("/tmp/Short/project/Short.blend"))
        );
    }

    #[test]
    fn test_plan_error_code() {
        let err: ScaffoldError = PlanError::EmptyProjectName("/tmp/".into()).into();
        assert_eq!(err.code(), "EMPTY_PROJECT_NAME");
        assert!(err.path().is_none());
    }
}
