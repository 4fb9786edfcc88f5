//! deploycheck-scaffold - create the web project's placeholder layout in the
//! current directory.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "deploycheck-scaffold")]
#[command(about = "Create missing project folders and empty placeholder files in the current directory")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    deploycheck::telemetry::init_tracing(false);
    deploycheck::output::init(false, false);

    deploycheck::scaffold::run(Path::new("."))?;
    Ok(())
}
