use clap::Parser;

mod assets;
mod builder;
mod cli;
mod command;
mod exec;
mod git;
mod manifest;
mod result;
mod token;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("tagship")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let runner = exec::ProcessRunner::new();

    match cli_args.command {
        cli::Command::Release { build, upload } => command::release::execute(
            &runner,
            command::release::Options { build, upload },
        ),
        cli::Command::CleanTag { tag } => {
            command::clean_tag::execute(&runner, tag)
        }
    }
}
