//! Best-effort tag and release removal command.
use color_eyre::eyre::eyre;
use log::*;

use crate::{
    exec::{CommandOutput, CommandRequest, CommandRunner},
    git,
    result::Result,
};

/// Boilerplate line prefix the GitHub CLI prints when deleting a release
/// without also deleting its tag; dropped from forwarded output.
const RELEASE_DELETE_NOISE_PREFIX: &str = "! Note that";

/// Delete `tag` (or the most recent tag) locally, on the origin remote, and
/// from hosted releases.
///
/// The three deletions are independent side effects with no rollback, so
/// each is attempted regardless of the others' outcome. Only the absence of
/// any tag to operate on is terminal.
pub fn execute(runner: &dyn CommandRunner, tag: Option<String>) -> Result<()> {
    let tag = match tag {
        Some(tag) => tag,
        None => git::latest_tag(runner)?.ok_or(eyre!("no tags found"))?,
    };

    info!("cleaning up tag: {tag}");

    match git::delete_local_tag(runner, &tag) {
        Ok(output) if !output.success => {
            warn!(
                "failed to delete local tag {tag}: {}",
                output.stderr.trim()
            );
        }
        Ok(_) => info!("deleted local tag {tag}"),
        Err(err) => warn!("failed to delete local tag {tag}: {err:#}"),
    }

    match git::delete_remote_tag(runner, &tag) {
        Ok(output) if !output.success => {
            warn!(
                "failed to delete remote tag {tag}: {}",
                output.stderr.trim()
            );
        }
        Ok(_) => info!("deleted remote tag {tag}"),
        Err(err) => warn!("failed to delete remote tag {tag}: {err:#}"),
    }

    match delete_release(runner, &tag) {
        Ok(output) => {
            let filtered = filter_release_delete_output(&output.combined());

            for line in filtered.lines().filter(|line| !line.trim().is_empty())
            {
                info!("{line}");
            }

            if output.success {
                info!("deleted release {tag}");
            } else {
                warn!("failed to delete release {tag}");
            }
        }
        Err(err) => warn!("failed to delete release {tag}: {err:#}"),
    }

    info!("tag '{tag}' cleanup finished");

    Ok(())
}

fn delete_release(
    runner: &dyn CommandRunner,
    tag: &str,
) -> Result<CommandOutput> {
    runner.run(CommandRequest::new(
        "gh",
        &["release", "delete", tag, "--yes"],
    ))
}

/// Drop the gh CLI's informational note line, keeping every other line in
/// order.
fn filter_release_delete_output(output: &str) -> String {
    output
        .lines()
        .filter(|line| !line.starts_with(RELEASE_DELETE_NOISE_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}
