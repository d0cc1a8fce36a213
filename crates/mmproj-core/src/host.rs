//! Host seam
//!
//! The application that owns the working document implements
//! [`DocumentHost`]. The scaffolder only asks it to save; it never touches
//! document bytes itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HostError;

/// Extension used when the host cannot tell its own
pub const DEFAULT_DOCUMENT_EXTENSION: &str = "blend";

/// An application that can persist its current document
pub trait DocumentHost {
    /// Extension (without leading dot) of documents this host writes
    fn document_extension(&self) -> &str;

    /// Save the current document to `path`, overwriting any existing file.
    ///
    /// # Errors
    /// Returns a [`HostError`] if the document could not be written.
    fn save_document_as(&mut self, path: &Path) -> Result<(), HostError>;
}

/// Host whose current document is a file on disk.
///
/// Saving copies that file to the target and makes the copy the current
/// document, the way "save as" does in an editor.
#[derive(Debug, Clone)]
pub struct FileCopyHost {
    document: PathBuf,
    extension: String,
}

impl FileCopyHost {
    /// Create a host for `document`, taking the extension from its file name
    #[must_use]
    pub fn new(document: PathBuf) -> Self {
        let extension = document
            .extension()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_EXTENSION)
            .to_string();
        Self {
            document,
            extension,
        }
    }

    /// Override the document extension
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Path of the current document
    #[must_use]
    pub fn document(&self) -> &Path {
        &self.document
    }
}

impl DocumentHost for FileCopyHost {
    fn document_extension(&self) -> &str {
        &self.extension
    }

    fn save_document_as(&mut self, path: &Path) -> Result<(), HostError> {
        if !self.document.is_file() {
            return Err(HostError::NoDocument(self.document.display().to_string()));
        }

        // Copying a file onto itself would truncate it
        if path.exists() && fs::canonicalize(path)? == fs::canonicalize(&self.document)? {
            tracing::debug!(path = %path.display(), "document already at target");
            return Ok(());
        }

        fs::copy(&self.document, path)?;
        tracing::debug!(
            from = %self.document.display(),
            to = %path.display(),
            "document saved"
        );
        self.document = path.to_path_buf();
        Ok(())
    }
}
