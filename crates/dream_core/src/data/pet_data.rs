//! Soul pet data structures.

use serde::{Deserialize, Serialize};

use super::Record;

/// A pet's claimed use of a skill.
///
/// Both fields are optional in content files. A reference without a
/// `skill_id` is legal but gets a warning during verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetSkill {
    /// Id of the referenced skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<String>,

    /// Name the pet data uses for the skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PetSkill {
    /// Reference a skill by id with a local name.
    pub fn new(skill_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            skill_id: Some(skill_id.into()),
            name: Some(name.into()),
        }
    }

    /// The referenced skill id, treating an empty string as absent.
    #[must_use]
    pub fn skill_id(&self) -> Option<&str> {
        self.skill_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// An evolution or mutation path to another soul pet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evolution {
    /// Id of the pet this one evolves into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl Evolution {
    /// Evolution into the given pet id.
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: Some(target_id.into()),
        }
    }

    /// The target id, treating an empty string as absent.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Data-driven soul pet species definition.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": "p1",
///     "name": "Ember Fox",
///     "rank": "servant",
///     "skills": [{ "skill_id": "s1", "name": "Bite", "learn_level": 1 }],
///     "evolutions": [{ "target_id": "p2", "type": "evolution" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoulPetData {
    /// Unique string identifier, also the target of evolutions.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Skills this pet can learn (None when the key is absent or null).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<PetSkill>>,

    /// Pets this one can evolve into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolutions: Option<Vec<Evolution>>,
}

impl SoulPetData {
    /// Create a pet with no skills and no evolutions.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: None,
            evolutions: None,
        }
    }

    /// Add a skill reference.
    pub fn with_skill(mut self, skill: PetSkill) -> Self {
        self.skills.get_or_insert_with(Vec::new).push(skill);
        self
    }

    /// Add an evolution path.
    pub fn with_evolution(mut self, evolution: Evolution) -> Self {
        self.evolutions.get_or_insert_with(Vec::new).push(evolution);
        self
    }

    /// Skill references, empty when none are declared.
    #[must_use]
    pub fn skills(&self) -> &[PetSkill] {
        self.skills.as_deref().unwrap_or_default()
    }

    /// Evolution paths, empty when none are declared.
    #[must_use]
    pub fn evolutions(&self) -> &[Evolution] {
        self.evolutions.as_deref().unwrap_or_default()
    }
}

impl Record for SoulPetData {
    const COLLECTION: &'static str = "soul pet";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
