//! Cross-reference checks between soul pets and skills.
//!
//! Checks never stop at the first problem: every pet and every reference
//! is visited, and findings come back in declaration order.

use crate::data::{SkillData, SoulPetData};
use crate::index::RecordIndex;
use crate::report::{Finding, FindingKind};

/// Result of one reference check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// All findings in the order they were produced.
    pub findings: Vec<Finding>,
    /// Number of counted errors among `findings`.
    pub errors: usize,
}

impl CheckOutcome {
    fn push(&mut self, finding: Finding) {
        tracing::debug!("{finding}");
        if finding.kind.is_error() {
            self.errors += 1;
        }
        self.findings.push(finding);
    }

    /// Count findings of one kind.
    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }
}

/// Check that every pet skill reference names an indexed skill.
///
/// - No id: warning, not counted.
/// - Unknown id: error, counted.
/// - Known id with a different local name: note, not counted.
pub fn check_skill_references(
    pets: &[SoulPetData],
    skills: &RecordIndex<'_, SkillData>,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for pet in pets {
        for reference in pet.skills() {
            let Some(skill_id) = reference.skill_id() else {
                outcome.push(Finding::skill_without_id(pet));
                continue;
            };

            match skills.get(skill_id) {
                None => outcome.push(Finding::unknown_skill(pet, skill_id)),
                Some(skill) => {
                    if reference.name.as_ref().is_some_and(|name| *name != skill.name) {
                        outcome.push(Finding::skill_name_mismatch(pet, reference, skill));
                    }
                }
            }
        }
    }

    outcome
}

/// Check that every evolution targets an indexed pet.
///
/// An absent or empty target id is reported as an unknown target, unlike
/// skill references where a missing id only warns.
pub fn check_evolution_references(
    pets: &[SoulPetData],
    index: &RecordIndex<'_, SoulPetData>,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for pet in pets {
        for evolution in pet.evolutions() {
            let resolved = evolution.target_id().is_some_and(|id| index.contains(id));
            if !resolved {
                outcome.push(Finding::unknown_evolution(pet, evolution));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Evolution, PetSkill};
    use crate::index::DuplicatePolicy;

    fn skills() -> Vec<SkillData> {
        vec![SkillData::new("s1", "Bite"), SkillData::new("s2", "Flame")]
    }

    #[test]
    fn test_valid_references_have_no_findings() {
        let skills = skills();
        let pets = vec![
            SoulPetData::new("p1", "Ember Fox")
                .with_skill(PetSkill::new("s1", "Bite"))
                .with_evolution(Evolution::new("p2")),
            SoulPetData::new("p2", "Blaze Fox").with_skill(PetSkill::new("s2", "Flame")),
        ];
        let skill_index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();
        let pet_index = RecordIndex::build(&pets, DuplicatePolicy::LastWins).unwrap();

        assert_eq!(check_skill_references(&pets, &skill_index), CheckOutcome::default());
        assert_eq!(check_evolution_references(&pets, &pet_index), CheckOutcome::default());
    }

    #[test]
    fn test_unknown_skill_is_counted() {
        let skills = vec![SkillData::new("s1", "Bite")];
        let pets = vec![SoulPetData::new("p1", "Ember Fox").with_skill(PetSkill::new("s999", "Void"))];
        let index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();

        let outcome = check_skill_references(&pets, &index);
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.findings.len(), 1);
        let line = outcome.findings[0].to_string();
        assert!(line.starts_with("Error:"));
        assert!(line.contains("s999"));
        assert!(line.contains("Ember Fox (p1)"));
    }

    #[test]
    fn test_missing_skill_id_warns_once() {
        let skills = skills();
        let pets = vec![SoulPetData::new("p1", "Ember Fox")
            .with_skill(PetSkill::default())
            .with_skill(PetSkill {
                skill_id: Some(String::new()),
                name: Some("Bite".to_string()),
            })];
        let index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();

        let outcome = check_skill_references(&pets, &index);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.count(FindingKind::Warning), 2);
        assert_eq!(outcome.findings.len(), 2);
    }

    #[test]
    fn test_name_mismatch_is_a_note() {
        let skills = skills();
        let pets = vec![SoulPetData::new("p1", "Ember Fox")
            .with_skill(PetSkill::new("s1", "Nibble"))
            .with_skill(PetSkill {
                skill_id: Some("s2".to_string()),
                name: None,
            })];
        let index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();

        let outcome = check_skill_references(&pets, &index);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.count(FindingKind::Note), 1);
        assert_eq!(outcome.findings.len(), 1);
    }

    #[test]
    fn test_evolution_to_unknown_or_missing_target() {
        let pets = vec![SoulPetData::new("p1", "Ember Fox")
            .with_evolution(Evolution::new("p404"))
            .with_evolution(Evolution::default())
            .with_evolution(Evolution::new("p1"))];
        let index = RecordIndex::build(&pets, DuplicatePolicy::LastWins).unwrap();

        let outcome = check_evolution_references(&pets, &index);
        assert_eq!(outcome.errors, 2);
        assert_eq!(outcome.count(FindingKind::EvolutionError), 2);
        assert!(outcome.findings[0].message.ends_with("p404"));
        assert!(outcome.findings[1].message.ends_with("<missing>"));
    }

    #[test]
    fn test_findings_follow_declaration_order() {
        let skills = skills();
        let pets = vec![
            SoulPetData::new("p1", "Ember Fox").with_skill(PetSkill::new("x1", "A")),
            SoulPetData::new("p2", "Blaze Fox")
                .with_skill(PetSkill::default())
                .with_skill(PetSkill::new("x2", "B")),
        ];
        let index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();

        let kinds: Vec<_> = check_skill_references(&pets, &index)
            .findings
            .iter()
            .map(|f| f.kind)
            .collect();
        assert_eq!(
            kinds,
            [FindingKind::SkillError, FindingKind::Warning, FindingKind::SkillError]
        );
    }
}
