//! Release asset computation and upload.
use color_eyre::eyre::eyre;
use log::*;
use std::path::{Path, PathBuf};

use crate::{
    exec::{CommandRequest, CommandRunner},
    manifest::ProjectMetadata,
    result::Result,
};

/// Conventional build output directory.
pub const DIST_DIR: &str = "dist";

/// Expected artifact filenames for a project: wheel first, then sdist.
pub fn artifact_names(metadata: &ProjectMetadata) -> [String; 2] {
    [
        format!("{}-{}-py3-none-any.whl", metadata.name, metadata.version),
        format!("{}-{}.tar.gz", metadata.name, metadata.version),
    ]
}

/// Expected artifacts that actually exist under the dist directory.
pub fn existing_artifacts(
    dist_dir: &Path,
    metadata: &ProjectMetadata,
) -> Vec<PathBuf> {
    artifact_names(metadata)
        .into_iter()
        .map(|name| dist_dir.join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Upload on-disk artifacts to the hosted release for `tag`.
///
/// Fails without spawning the upload subprocess when no expected artifact is
/// present on disk.
pub fn upload(
    runner: &dyn CommandRunner,
    tag: &str,
    dist_dir: &Path,
    metadata: &ProjectMetadata,
) -> Result<()> {
    let artifacts = existing_artifacts(dist_dir, metadata);

    if artifacts.is_empty() {
        return Err(eyre!(
            "no artifacts found in {}: expected {}",
            dist_dir.display(),
            artifact_names(metadata).join(", ")
        ));
    }

    let mut args =
        vec!["release".to_string(), "upload".to_string(), tag.to_string()];

    for artifact in &artifacts {
        info!("uploading asset: {}", artifact.display());
        args.push(artifact.display().to_string());
    }

    let output = runner.run(CommandRequest {
        program: "gh".to_string(),
        args,
        envs: vec![],
    })?;

    if !output.success {
        return Err(eyre!("asset upload failed:\n{}", output.stderr));
    }

    info!("uploaded {} asset(s) to release {}", artifacts.len(), tag);

    Ok(())
}
