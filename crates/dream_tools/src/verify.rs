//! Soul pet data verification.
//!
//! Loads the pet and skill collections, checks every skill reference and
//! every evolution target, and streams a human-readable report to a
//! writer. Load and index failures abort before any check runs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dream_core::data::{SkillData, SoulPetData, PETS_FILE, SKILLS_FILE};
use dream_core::error::DataError;
use dream_core::index::{DuplicatePolicy, RecordIndex};
use dream_core::report::{Finding, VerificationSummary};
use dream_core::validate::{check_evolution_references, check_skill_references};
use thiserror::Error;

use crate::loader::load_records;

/// Exit code when the tool cannot run (missing or malformed input).
pub const EXIT_FATAL: i32 = 1;

/// Exit code for failed validation under [`FailurePolicy::ExitCode`].
pub const EXIT_VALIDATION_FAILED: i32 = 2;

/// Errors that stop a verification run.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Loading or indexing the data failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// How a failed validation affects the process exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Print the failure and exit 0.
    #[default]
    ReportOnly,
    /// Print the failure and exit with [`EXIT_VALIDATION_FAILED`].
    ExitCode,
}

impl FailurePolicy {
    /// Process exit code for a completed run.
    #[must_use]
    pub const fn exit_code(self, summary: &VerificationSummary) -> i32 {
        match self {
            Self::ExitCode if !summary.passed() => EXIT_VALIDATION_FAILED,
            _ => 0,
        }
    }
}

/// Resolved locations of the two data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Soul pet definitions.
    pub pets: PathBuf,
    /// Skill definitions.
    pub skills: PathBuf,
}

impl DataPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            pets: dir.join(PETS_FILE),
            skills: dir.join(SKILLS_FILE),
        }
    }

    /// `data/` under the workspace root, two levels above this crate.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .parent()
            .and_then(Path::parent)
            .unwrap_or(manifest_dir)
            .join("data")
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(Self::default_data_dir())
    }
}

/// Options for a verification run.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Duplicate-id handling for both indexes.
    pub duplicates: DuplicatePolicy,
}

/// Run a full verification and write the report to `out`.
///
/// The report is written incrementally, so a fatal error leaves only the
/// header behind.
///
/// # Errors
///
/// Returns [`VerifyError::Data`] if either file is missing or malformed,
/// or if an index rejects a duplicate id, and [`VerifyError::Output`] if
/// the report cannot be written.
pub fn run<W: Write>(
    paths: &DataPaths,
    options: VerifyOptions,
    out: &mut W,
) -> Result<VerificationSummary, VerifyError> {
    writeln!(
        out,
        "Loading data from:\n  {}\n  {}\n",
        paths.pets.display(),
        paths.skills.display()
    )?;

    let pets: Vec<SoulPetData> = load_records(&paths.pets)?;
    let skills: Vec<SkillData> = load_records(&paths.skills)?;
    tracing::info!(
        "Loaded {} pets from {} and {} skills from {}",
        pets.len(),
        paths.pets.display(),
        skills.len(),
        paths.skills.display()
    );

    // Both indexes come first so a rejected duplicate aborts before any findings.
    let skill_index = RecordIndex::build(&skills, options.duplicates)?;
    let pet_index = RecordIndex::build(&pets, options.duplicates)?;

    writeln!(out, "Loaded {} skills.", skills.len())?;
    let skill_check = check_skill_references(&pets, &skill_index);
    write_findings(out, &skill_check.findings)?;

    writeln!(out, "Loaded {} soul pets.", pets.len())?;
    let evolution_check = check_evolution_references(&pets, &pet_index);
    write_findings(out, &evolution_check.findings)?;

    let summary = VerificationSummary {
        skill_errors: skill_check.errors,
        evolution_errors: evolution_check.errors,
    };
    writeln!(out, "\n{summary}")?;

    Ok(summary)
}

fn write_findings<W: Write>(out: &mut W, findings: &[Finding]) -> io::Result<()> {
    for finding in findings {
        writeln!(out, "{finding}")?;
    }
    Ok(())
}
