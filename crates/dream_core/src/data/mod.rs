//! Data structures for soul pet and skill definitions.
//!
//! This module contains plain record types deserialized from the game's
//! content files. Fields the reference checks do not read are ignored on
//! load, so content files may carry any extra attributes.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `dream_tools`.

mod pet_data;
mod skill_data;

pub use pet_data::{Evolution, PetSkill, SoulPetData};
pub use skill_data::SkillData;

/// Conventional file name of the soul pet collection.
pub const PETS_FILE: &str = "soul_pets.json";

/// Conventional file name of the skill collection.
pub const SKILLS_FILE: &str = "skills.json";

/// A record identified by a string id.
///
/// Implemented by every top-level record so one index type serves both
/// collections.
pub trait Record {
    /// Name of the collection, used in diagnostics (e.g. "skill").
    const COLLECTION: &'static str;

    /// Unique id of this record.
    fn id(&self) -> &str;

    /// Display name of this record.
    fn name(&self) -> &str;
}
