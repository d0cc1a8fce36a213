//! Scaffold-and-save action
//!
//! Runs the linear flow: plan paths, create the folder tree, ask the host to
//! save. The first failure cancels the run. Nothing already created on disk
//! is rolled back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::host::DocumentHost;
use crate::plan::{plan_project, ProjectPlan};
use crate::report::Reporter;

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationState {
    Idle,
    PlanningPaths,
    CreatingFolders,
    Saving,
    Finished,
    Cancelled,
}

/// Completion status handed back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationStatus {
    Finished,
    Cancelled,
}

impl OperationStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Result of one create-if-missing attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum FolderOutcome {
    Created(PathBuf),
    AlreadyPresent(PathBuf),
}

/// Create each folder and its missing ancestors, in order.
///
/// A folder that already exists is fine. Any other failure stops here and the
/// remaining folders are not attempted.
///
/// # Errors
/// Returns [`ScaffoldError::FolderCreation`] naming the first folder that
/// could not be created.
pub fn create_folders<R: Reporter + ?Sized>(
    folders: &[PathBuf],
    reporter: &mut R,
) -> ScaffoldResult<Vec<FolderOutcome>> {
    let mut outcomes = Vec::with_capacity(folders.len());

    for folder in folders {
        let existed = folder.is_dir();
        tracing::debug!(path = %folder.display(), existed, "creating folder");

        fs::create_dir_all(folder).map_err(|source| ScaffoldError::FolderCreation {
            path: folder.clone(),
            source,
        })?;

        if existed {
            reporter.info(&format!("Folder already exists: {}", folder.display()));
            outcomes.push(FolderOutcome::AlreadyPresent(folder.clone()));
        } else {
            reporter.info(&format!("Created folder: {}", folder.display()));
            outcomes.push(FolderOutcome::Created(folder.clone()));
        }
    }

    Ok(outcomes)
}

/// The save-with-folder-creation action for one chosen path.
///
/// Errors never leave [`SaveWithFolders::run`]: they are reported as
/// `ERROR` messages and turned into [`OperationStatus::Cancelled`].
#[derive(Debug)]
pub struct SaveWithFolders {
    filepath: String,
    state: OperationState,
    plan: Option<ProjectPlan>,
    outcomes: Vec<FolderOutcome>,
    error: Option<ScaffoldError>,
}

impl SaveWithFolders {
    /// Prepare the action for the path returned by the host's file dialog
    #[must_use]
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            state: OperationState::Idle,
            plan: None,
            outcomes: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> OperationState {
        self.state
    }

    /// Plan computed by the last run, if planning succeeded
    #[must_use]
    pub fn plan(&self) -> Option<&ProjectPlan> {
        self.plan.as_ref()
    }

    /// Folder outcomes of the last run
    #[must_use]
    pub fn outcomes(&self) -> &[FolderOutcome] {
        &self.outcomes
    }

    /// Error that cancelled the last run
    #[must_use]
    pub fn error(&self) -> Option<&ScaffoldError> {
        self.error.as_ref()
    }

    /// Run the whole flow once
    pub fn run<H, R>(&mut self, host: &mut H, reporter: &mut R) -> OperationStatus
    where
        H: DocumentHost + ?Sized,
        R: Reporter + ?Sized,
    {
        self.state = OperationState::Idle;
        self.plan = None;
        self.outcomes.clear();
        self.error = None;

        match self.execute(host, reporter) {
            Ok(()) => {
                self.state = OperationState::Finished;
                tracing::info!(path = %self.filepath, "project saved");
                OperationStatus::Finished
            }
            Err(err) => {
                tracing::warn!(
                    code = err.code(),
                    stage = ?self.state,
                    error = %err,
                    "save with folder creation cancelled"
                );
                reporter.error(&err.to_string());
                self.error = Some(err);
                self.state = OperationState::Cancelled;
                OperationStatus::Cancelled
            }
        }
    }

    fn execute<H, R>(&mut self, host: &mut H, reporter: &mut R) -> ScaffoldResult<()>
    where
        H: DocumentHost + ?Sized,
        R: Reporter + ?Sized,
    {
        self.state = OperationState::PlanningPaths;
        let plan = plan_project(&self.filepath, host.document_extension())?;
        let scene = plan.scene_properties();
        reporter.info(&format!(
            "Root folder: {}, Folder name: {}",
            scene.root_folder, scene.folder_name
        ));
        let folders = plan.folders.clone();
        let saved_document_path = plan.saved_document_path.clone();
        self.plan = Some(plan);

        self.state = OperationState::CreatingFolders;
        self.outcomes = create_folders(&folders, reporter)?;

        self.state = OperationState::Saving;
        host.save_document_as(&saved_document_path)
            .map_err(|source| ScaffoldError::Save {
                path: saved_document_path.clone(),
                source,
            })?;
        reporter.info(&format!(
            "Saved document at: {}",
            saved_document_path.display()
        ));

        Ok(())
    }
}

/// Plan, scaffold and save for `filepath` in one call
pub fn save_with_folder_creation<H, R>(
    filepath: &str,
    host: &mut H,
    reporter: &mut R,
) -> OperationStatus
where
    H: DocumentHost + ?Sized,
    R: Reporter + ?Sized,
{
    SaveWithFolders::new(filepath).run(host, reporter)
}
