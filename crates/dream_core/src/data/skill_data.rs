//! Skill data structures.

use serde::{Deserialize, Serialize};

use super::Record;

/// Data-driven skill definition.
///
/// Only the identity fields are modelled. Combat attributes such as
/// `power` or `element` may be present in the file and are skipped.
///
/// # Example JSON
///
/// ```json
/// { "id": "s1", "name": "Bite", "element": "beast", "power": 40 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillData {
    /// Unique string identifier referenced by pets.
    pub id: String,

    /// Canonical display name.
    pub name: String,
}

impl SkillData {
    /// Create a skill definition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Record for SkillData {
    const COLLECTION: &'static str = "skill";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let skill: SkillData = serde_json::from_str(
            r#"{"id": "s1", "name": "Bite", "element": "beast", "power": 40, "effect": null}"#,
        )
        .unwrap();
        assert_eq!(skill, SkillData::new("s1", "Bite"));
    }

    #[test]
    fn test_name_is_required() {
        let result = serde_json::from_str::<SkillData>(r#"{"id": "s1"}"#);
        assert!(result.is_err());
    }
}
