//! deploycheck - smoke-test a deployed web application.

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::errors::ConfigError;
use crate::output;
use crate::telemetry::init_tracing;
use crate::verifier::{DeploymentVerifier, TargetConfiguration, Verdict};

#[derive(Parser, Debug)]
#[command(name = "deploycheck")]
#[command(about = "Smoke-test a deployed web application's pages and APIs")]
#[command(version)]
struct Cli {
    /// Base URL of the deployment (default: http://localhost:5000)
    #[arg(value_name = "BASE_URL")]
    base_url: Option<String>,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Pause after each page/API request, in milliseconds
    #[arg(long, value_name = "MS")]
    pause_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Plain ASCII status tags instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Log each request to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Layer CLI flags over the loaded config and validate the result.
    fn resolve(&self, mut config: Config) -> std::result::Result<Config, ConfigError> {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(pause) = self.pause_ms {
            config.pause_ms = pause;
        }
        config.ui.ascii |= self.ascii;
        config.ui.no_color |= self.no_color;
        config.validate()?;
        Ok(config)
    }
}

/// Parse arguments, run the suite, and return the verdict.
pub fn run() -> Result<Verdict> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.resolve(Config::load(cli.config.as_deref())?)?;
    output::init(config.ui.ascii, config.ui.no_color);

    let target = TargetConfiguration::from_config(&config);
    tracing::debug!(base_url = %target.base_url, "Resolved target");

    let mut verifier = DeploymentVerifier::connect(target)?;
    let summary = verifier.run_all();
    Ok(summary.verdict())
}
