//! Proptest strategies for generating soul pet datasets.
//!
//! Generated ids are unique within a collection (`s0`, `s1`, ... and
//! `p0`, `p1`, ...), so any id outside those ranges is guaranteed to dangle.

use dream_core::data::{Evolution, PetSkill, SkillData, SoulPetData};
use proptest::collection::vec;
use proptest::prelude::*;

/// Maximum skills generated per dataset.
pub const MAX_SKILLS: usize = 8;

/// Maximum pets generated per dataset.
pub const MAX_PETS: usize = 8;

/// Both collections of a generated dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Skill definitions.
    pub skills: Vec<SkillData>,
    /// Pet definitions.
    pub pets: Vec<SoulPetData>,
}

/// A dataset plus the number of broken references injected into it.
#[derive(Debug, Clone)]
pub struct BrokenDataset {
    /// The dataset.
    pub data: Dataset,
    /// Skill references pointing at ids that do not exist.
    pub dangling_skills: usize,
    /// Evolutions pointing at ids that do not exist.
    pub dangling_evolutions: usize,
    /// Skill references with no id at all.
    pub anonymous_skills: usize,
}

fn skill_name(index: usize) -> String {
    format!("Skill {index}")
}

/// One pet's skill references as (skill index, use an alias name).
fn skill_refs(skill_count: usize) -> impl Strategy<Value = Vec<(usize, bool)>> {
    // No skills means no references can resolve.
    let max_refs = if skill_count == 0 { 1 } else { 4 };
    vec((0..skill_count.max(1), any::<bool>()), 0..max_refs)
}

/// A dataset where every reference resolves.
///
/// When `rename` is set, some skill references use a local name that
/// differs from the skill's own name.
pub fn valid_dataset(rename: bool) -> impl Strategy<Value = Dataset> {
    (0..=MAX_SKILLS, 0..=MAX_PETS).prop_flat_map(move |(skill_count, pet_count)| {
        let pet = (skill_refs(skill_count), vec(0..pet_count.max(1), 0..3));
        vec(pet, pet_count).prop_map(move |pets| {
            let skills = (0..skill_count)
                .map(|i| SkillData::new(format!("s{i}"), skill_name(i)))
                .collect();

            let pets = pets
                .into_iter()
                .enumerate()
                .map(|(i, (skill_refs, evolutions))| {
                    let mut pet = SoulPetData::new(format!("p{i}"), format!("Pet {i}"));
                    for (skill, alternate) in skill_refs {
                        let name = if rename && alternate {
                            format!("Alias {skill}")
                        } else {
                            skill_name(skill)
                        };
                        pet = pet.with_skill(PetSkill::new(format!("s{skill}"), name));
                    }
                    for target in evolutions {
                        pet = pet.with_evolution(Evolution::new(format!("p{target}")));
                    }
                    pet
                })
                .collect();

            Dataset { skills, pets }
        })
    })
}

/// Kind of broken reference to inject.
#[derive(Debug, Clone, Copy)]
enum Breakage {
    UnknownSkill,
    AnonymousSkill,
    UnknownEvolution,
    MissingEvolutionTarget,
}

fn breakage() -> impl Strategy<Value = Breakage> {
    prop_oneof![
        Just(Breakage::UnknownSkill),
        Just(Breakage::AnonymousSkill),
        Just(Breakage::UnknownEvolution),
        Just(Breakage::MissingEvolutionTarget),
    ]
}

/// A valid dataset with at least one pet and a handful of broken references.
pub fn broken_dataset() -> impl Strategy<Value = BrokenDataset> {
    valid_dataset(false)
        .prop_filter("needs a pet to break", |data| !data.pets.is_empty())
        .prop_flat_map(|data| {
            let pet_count = data.pets.len();
            (
                Just(data),
                vec((0..pet_count, breakage()), 1..6),
            )
        })
        .prop_map(|(data, breaks)| {
            let mut broken = BrokenDataset {
                data,
                dangling_skills: 0,
                dangling_evolutions: 0,
                anonymous_skills: 0,
            };

            for (n, (pet, kind)) in breaks.into_iter().enumerate() {
                let pet = &mut broken.data.pets[pet];
                match kind {
                    Breakage::UnknownSkill => {
                        pet.skills
                            .get_or_insert_with(Vec::new)
                            .push(PetSkill::new(format!("unknown_s{n}"), "Ghost"));
                        broken.dangling_skills += 1;
                    }
                    Breakage::AnonymousSkill => {
                        pet.skills.get_or_insert_with(Vec::new).push(PetSkill::default());
                        broken.anonymous_skills += 1;
                    }
                    Breakage::UnknownEvolution => {
                        pet.evolutions
                            .get_or_insert_with(Vec::new)
                            .push(Evolution::new(format!("unknown_p{n}")));
                        broken.dangling_evolutions += 1;
                    }
                    Breakage::MissingEvolutionTarget => {
                        pet.evolutions
                            .get_or_insert_with(Vec::new)
                            .push(Evolution::default());
                        broken.dangling_evolutions += 1;
                    }
                }
            }

            broken
        })
}
