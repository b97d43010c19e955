//! Soul pet data verifier.
//!
//! Checks that every skill a pet lists and every pet it evolves into
//! exist in the content files, and prints a report to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Verify data/soul_pets.json and data/skills.json at the workspace root
//! cargo run -p dream_tools --bin verify-data
//!
//! # Verify another directory and fail CI on dangling references
//! cargo run -p dream_tools --bin verify-data -- --data-dir content/ --on-failure exit-code
//! ```

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dream_core::index::DuplicatePolicy;
use dream_tools::verify::{self, DataPaths, FailurePolicy, VerifyOptions, EXIT_FATAL};

#[derive(Parser)]
#[command(name = "verify-data")]
#[command(about = "Verify skill and evolution references in soul pet data")]
#[command(version)]
struct Cli {
    /// Directory holding soul_pets.json and skills.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Soul pet file (overrides the one in the data directory)
    #[arg(long)]
    pets: Option<PathBuf>,

    /// Skill file (overrides the one in the data directory)
    #[arg(long)]
    skills: Option<PathBuf>,

    /// Exit status when references are broken
    #[arg(long, value_enum, default_value_t = FailurePolicy::ReportOnly)]
    on_failure: FailurePolicy,

    /// Handling of records that share an id
    #[arg(long, value_enum, default_value_t = Duplicates::LastWins)]
    duplicates: Duplicates,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Duplicates {
    /// Later records replace earlier ones
    LastWins,
    /// Abort on the first repeated id
    Reject,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::LastWins => Self::LastWins,
            Duplicates::Reject => Self::Reject,
        }
    }
}

impl Cli {
    fn data_paths(&self) -> DataPaths {
        let mut paths = self
            .data_dir
            .as_ref()
            .map_or_else(DataPaths::default, DataPaths::in_dir);
        if let Some(pets) = &self.pets {
            paths.pets.clone_from(pets);
        }
        if let Some(skills) = &self.skills {
            paths.skills.clone_from(skills);
        }
        paths
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let paths = cli.data_paths();
    let options = VerifyOptions {
        duplicates: cli.duplicates.into(),
    };

    let result = verify::run(&paths, options, &mut io::stdout().lock());
    let code = match result {
        Ok(summary) => {
            tracing::debug!(
                "Verification finished: {} skill errors, {} evolution errors",
                summary.skill_errors,
                summary.evolution_errors
            );
            cli.on_failure.exit_code(&summary)
        }
        Err(e) => {
            tracing::error!("Verification aborted: {e}");
            println!("Error: {e}");
            EXIT_FATAL
        }
    };

    std::process::exit(code);
}
