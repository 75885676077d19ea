//! Project metadata sourced from pyproject.toml.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::result::Result;

/// Conventional manifest location relative to the working directory.
pub const MANIFEST_PATH: &str = "pyproject.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    project: ProjectMetadata,
}

/// Name and version from the manifest's `[project]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
}

/// Read project name and version from a pyproject.toml manifest.
///
/// Any read or parse failure is reported here and collapses to `None`:
/// callers never see partial metadata.
pub fn read_project_metadata(path: &Path) -> Option<ProjectMetadata> {
    match load(path) {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            warn!(
                "failed to read project metadata from {}: {err:#}",
                path.display()
            );
            None
        }
    }
}

fn load(path: &Path) -> Result<ProjectMetadata> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content)?;
    Ok(manifest.project)
}
