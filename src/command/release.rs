//! Semantic-release orchestration command.
use color_eyre::eyre::eyre;
use log::*;
use secrecy::ExposeSecret;
use std::path::Path;

use crate::{
    assets, builder,
    exec::{CommandRequest, CommandRunner},
    git, manifest,
    result::Result,
    token,
};

/// Optional stages around the semantic-release invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Build distribution packages before releasing.
    pub build: bool,
    /// Upload built artifacts to the hosted release after tagging.
    pub upload: bool,
}

/// Execute the release workflow: discover credentials, optionally build,
/// run `semantic-release version` with the token injected as GH_TOKEN, and
/// optionally upload artifacts to the newly created tag.
///
/// An upload failure is logged but does not fail the release: the version
/// has already been tagged and published at that point.
pub fn execute(runner: &dyn CommandRunner, options: Options) -> Result<()> {
    let auth_token = token::discover(runner)?
        .ok_or(eyre!("github token not found: run `gh auth login` first"))?;

    if options.build {
        builder::build_package(runner)?;
    }

    info!("running semantic-release");

    let request = CommandRequest::new("semantic-release", &["version"])
        .with_env("GH_TOKEN", auth_token.expose_secret());

    let output = runner.run(request)?;

    if !output.success {
        return Err(eyre!("semantic-release failed:\n{}", output.combined()));
    }

    info!("semantic-release completed");

    if options.build
        && options.upload
        && let Err(err) = upload_latest(runner)
    {
        warn!("asset upload failed: {err:#}");
    }

    Ok(())
}

/// Upload artifacts to the release for the tag semantic-release just created.
fn upload_latest(runner: &dyn CommandRunner) -> Result<()> {
    let tag = git::latest_tag(runner)?
        .ok_or(eyre!("no tag found after semantic-release run"))?;

    let metadata =
        manifest::read_project_metadata(Path::new(manifest::MANIFEST_PATH))
            .ok_or(eyre!("project metadata unavailable"))?;

    assets::upload(runner, &tag, Path::new(assets::DIST_DIR), &metadata)
}
