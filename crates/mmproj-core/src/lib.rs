//! mmproj Core - Project planning and scaffolding
//!
//! This crate derives a multimedia project layout from a chosen save path,
//! creates the fixed folder tree and hands the document save to the host.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod host;
pub mod plan;
pub mod report;
pub mod scaffold;

pub use error::{HostError, PlanError, ScaffoldError, ScaffoldResult};
pub use host::{DocumentHost, FileCopyHost};
pub use plan::{plan_project, ProjectPlan, SceneProperties, FOLDER_SPEC};
pub use report::{Report, Reporter, Severity};
pub use scaffold::{
    create_folders, save_with_folder_creation, FolderOutcome, OperationState, OperationStatus,
    SaveWithFolders,
};
