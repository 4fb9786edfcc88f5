//! deploycheck - deployment smoke tests and project scaffolding
//!
//! Two independent utilities sharing one crate:
//!
//! - **Verifier** (`deploycheck`): probes a deployed web application's pages,
//!   JSON APIs, real-time feed and login, then applies an 80% pass threshold.
//! - **Scaffold** (`deploycheck-scaffold`): creates the project's placeholder
//!   folders and files without touching anything that already exists.
//!
//! # Quick Start
//!
//! ```no_run
//! use deploycheck::verifier::{DeploymentVerifier, TargetConfiguration};
//!
//! let target = TargetConfiguration::new("https://staging.example.com/");
//! let mut verifier = DeploymentVerifier::connect(target)?;
//! let summary = verifier.run_all();
//! std::process::exit(summary.verdict().exit_code().into());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod scaffold;
pub mod telemetry;
pub mod verifier;
