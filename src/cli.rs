//! CLI argument parsing.
use clap::{Parser, Subcommand};

/// Global CLI arguments and subcommand selection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release workflow subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute, tag, and publish the next version with semantic-release.
    Release {
        /// Build distribution packages before releasing.
        #[arg(long, default_value_t = false)]
        build: bool,

        /// Upload built artifacts to the hosted release. Requires --build.
        #[arg(long, default_value_t = false)]
        upload: bool,
    },

    /// Delete a tag locally, on the remote, and from hosted releases.
    CleanTag {
        /// Tag to delete. Defaults to the most recent tag.
        tag: Option<String>,
    },
}
