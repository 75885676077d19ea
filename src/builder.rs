//! Distribution package build step.
use color_eyre::eyre::eyre;
use log::*;

use crate::{
    exec::{CommandRequest, CommandRunner},
    result::Result,
};

/// Build wheel and sdist artifacts into dist/ with `python -m build`.
pub fn build_package(runner: &dyn CommandRunner) -> Result<()> {
    info!("building distribution packages");

    let output = runner.run(CommandRequest::new("python", &["-m", "build"]))?;

    if !output.success {
        return Err(eyre!("package build failed:\n{}", output.stderr));
    }

    info!("package build succeeded");

    Ok(())
}
