//! Verification findings and the final summary.
//!
//! Everything here renders through [`std::fmt::Display`] so the tools
//! crate can stream the report to any writer.

use std::fmt;

use crate::data::{Evolution, PetSkill, SkillData, SoulPetData};

/// Heading of the summary block.
pub const SUMMARY_HEADER: &str = "--- Verification Summary ---";

/// Line printed when every reference resolves.
pub const PASS_MARKER: &str = "✅ Data verification PASSED! All references are valid.";

/// Placeholder rendered for an evolution with an absent or empty target id.
pub const MISSING_ID: &str = "<missing>";

/// Severity and origin of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// Skill reference without an id. Not counted.
    Warning,
    /// Skill reference to an unknown skill id. Counted.
    SkillError,
    /// Evolution to an unknown pet id. Counted.
    EvolutionError,
    /// Skill reference whose local name differs from the skill's name. Not counted.
    Note,
}

impl FindingKind {
    /// Line prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::SkillError | Self::EvolutionError => "Error",
            Self::Note => "Note",
        }
    }

    /// Whether this kind counts toward failure.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::SkillError | Self::EvolutionError)
    }
}

/// A single diagnostic produced by a reference check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// What kind of finding this is.
    pub kind: FindingKind,
    /// Human-readable message without the prefix.
    pub message: String,
}

impl Finding {
    /// Pet has a skill reference with no id.
    #[must_use]
    pub fn skill_without_id(pet: &SoulPetData) -> Self {
        Self {
            kind: FindingKind::Warning,
            message: format!("Pet {} ({}) has a skill without an ID.", pet.name, pet.id),
        }
    }

    /// Pet references a skill id that is not indexed.
    #[must_use]
    pub fn unknown_skill(pet: &SoulPetData, skill_id: &str) -> Self {
        Self {
            kind: FindingKind::SkillError,
            message: format!(
                "Pet {} ({}) references unknown skill ID: {}",
                pet.name, pet.id, skill_id
            ),
        }
    }

    /// Pet's local name for a skill differs from the skill's own name.
    #[must_use]
    pub fn skill_name_mismatch(
        pet: &SoulPetData,
        reference: &PetSkill,
        skill: &SkillData,
    ) -> Self {
        Self {
            kind: FindingKind::Note,
            message: format!(
                "Pet {} calls skill {} '{}', but DB name is '{}'.",
                pet.name,
                skill.id,
                reference.name.as_deref().unwrap_or_default(),
                skill.name
            ),
        }
    }

    /// Pet evolves into a pet id that is absent or not indexed.
    #[must_use]
    pub fn unknown_evolution(pet: &SoulPetData, evolution: &Evolution) -> Self {
        Self {
            kind: FindingKind::EvolutionError,
            message: format!(
                "Pet {} ({}) evolves into unknown ID: {}",
                pet.name,
                pet.id,
                evolution.target_id().unwrap_or(MISSING_ID)
            ),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.prefix(), self.message)
    }
}

/// Error counts for a full verification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationSummary {
    /// Dangling skill references.
    pub skill_errors: usize,
    /// Dangling evolution references.
    pub evolution_errors: usize,
}

impl VerificationSummary {
    /// True when no reference is dangling.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.skill_errors == 0 && self.evolution_errors == 0
    }
}

impl fmt::Display for VerificationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_HEADER}")?;
        if self.passed() {
            write!(f, "{PASS_MARKER}")
        } else {
            write!(
                f,
                "❌ Data verification FAILED with {} skill errors and {} evolution errors.",
                self.skill_errors, self.evolution_errors
            )
        }
    }
}
