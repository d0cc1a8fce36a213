//! Path planning
//!
//! Derives the project base directory, the scaffold folders and the saved
//! document location from the single path a user picks in a save dialog.

use serde::{Deserialize, Serialize};
use std::path::{is_separator, Component, Path, PathBuf};

use crate::error::PlanError;

/// Subfolders created under the project base directory, in creation order.
///
/// Each entry is a list of path segments so the host OS separator is used
/// when joining.
pub const FOLDER_SPEC: [&[&str]; 9] = [
    &["assets", "3D models"],
    &["assets", "textures"],
    &["assets", "references", "images"],
    &["project"],
    &["storyboard"],
    &["scripts"],
    &["addons"],
    &["render", "viewport render"],
    &["render", "render"],
];

/// Subfolder that receives the saved document
pub const PROJECT_FOLDER: &str = "project";

/// Everything a save-with-folders run needs to know about the target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    /// Parent directory of the chosen path
    pub root_folder: PathBuf,
    /// Chosen file name with its last extension stripped
    pub project_name: String,
    /// `root_folder/project_name`
    pub base_path: PathBuf,
    /// Absolute scaffold folders, in creation order
    pub folders: Vec<PathBuf>,
    /// `base_path/project/<project_name>.<ext>`
    pub saved_document_path: PathBuf,
}

/// Display-only values a host panel shows next to the action.
///
/// The save routine never reads these back; it always replans from the
/// chosen path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneProperties {
    pub root_folder: String,
    pub folder_name: String,
}

impl ProjectPlan {
    /// Values for the host's display fields
    #[must_use]
    pub fn scene_properties(&self) -> SceneProperties {
        SceneProperties {
            root_folder: self.root_folder.display().to_string(),
            folder_name: self.project_name.clone(),
        }
    }
}

/// Build the project plan for a user-chosen file path.
///
/// `document_extension` is the host's document extension, with or without a
/// leading dot.
///
/// # Errors
/// Returns [`PlanError::EmptyProjectName`] when the path ends in a separator or
/// its file name is only an extension.
pub fn plan_project(path: &str, document_extension: &str) -> Result<ProjectPlan, PlanError> {
    let (root, file_name) = split_project_path(path);
    let project_name = strip_extension(file_name);
    if project_name.is_empty() {
        return Err(PlanError::EmptyProjectName(path.to_string()));
    }

    let root_folder = PathBuf::from(root);
    let base_path = root_folder.join(project_name);

    let folders = FOLDER_SPEC
        .iter()
        .map(|segments| {
            segments
                .iter()
                .fold(base_path.clone(), |acc, segment| acc.join(segment))
        })
        .collect();

    let extension = document_extension.trim_start_matches('.');
    let document_name = if extension.is_empty() {
        project_name.to_string()
    } else {
        format!("{project_name}.{extension}")
    };
    let saved_document_path = base_path.join(PROJECT_FOLDER).join(document_name);

    Ok(ProjectPlan {
        root_folder,
        project_name: project_name.to_string(),
        base_path,
        folders,
        saved_document_path,
    })
}

/// Split a path string into its parent directory and final segment.
///
/// Works on the raw string so a trailing separator yields an empty file name
/// instead of being normalized away. Trailing separators are trimmed from the
/// parent unless it is the filesystem root. A path without any separator has
/// an empty parent (the current directory).
#[must_use]
pub fn split_project_path(path: &str) -> (&str, &str) {
    match path.rfind(is_separator) {
        Some(idx) => {
            let head = &path[..=idx];
            let file_name = &path[idx + 1..];
            let trimmed = head.trim_end_matches(is_separator);
            let root = if trimmed.is_empty() || is_bare_prefix(trimmed) {
                head
            } else {
                trimmed
            };
            (root, file_name)
        }
        None => ("", path),
    }
}

/// A drive prefix with no root after it (`D:`), which is relative to the
/// drive's current directory
fn is_bare_prefix(path: &str) -> bool {
    let mut components = Path::new(path).components();
    matches!(components.next(), Some(Component::Prefix(_))) && components.next().is_none()
}

/// Strip everything from the last `.` onwards.
///
/// A name without a dot is returned unchanged.
#[must_use]
pub fn strip_extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}
