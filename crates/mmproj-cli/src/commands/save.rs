//! Save CLI command
//!
//! Handles: mmproj save

use anyhow::{bail, Result};
use mmproj_core::{save_with_folder_creation, FileCopyHost, Reporter, Severity};
use std::path::PathBuf;

/// Prints reports with their severity tag: INFO to stdout, ERROR to stderr
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("[{severity}] {message}"),
            Severity::Error => eprintln!("[{severity}] {message}"),
        }
    }
}

/// Execute save command
pub fn execute(path: &str, document: PathBuf, extension: Option<&str>) -> Result<bool> {
    if !document.is_file() {
        bail!("Document does not exist: {}", document.display());
    }

    let mut host = FileCopyHost::new(document);
    if let Some(ext) = extension {
        host = host.with_extension(ext);
    }

    let status = save_with_folder_creation(path, &mut host, &mut ConsoleReporter);
    Ok(status.is_finished())
}
