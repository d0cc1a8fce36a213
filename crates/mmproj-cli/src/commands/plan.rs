//! Plan CLI command
//!
//! Handles: mmproj plan

use anyhow::Result;
use mmproj_core::plan_project;

/// Execute plan command
pub fn execute(path: &str, extension: &str, json: bool) -> Result<bool> {
    let plan = plan_project(path, extension)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(true);
    }

    let scene = plan.scene_properties();
    println!("Root folder: {}", scene.root_folder);
    println!("Folder name: {}", scene.folder_name);
    println!("Folders:");
    for folder in &plan.folders {
        println!("  {}", folder.display());
    }
    println!("Document: {}", plan.saved_document_path.display());
    Ok(true)
}
