//! Test fixtures and helpers.
//!
//! Pre-built datasets and temporary data directories
//! for consistent testing.

use std::fs;
use std::path::{Path, PathBuf};

use dream_core::data::{Evolution, PetSkill, SkillData, SoulPetData, PETS_FILE, SKILLS_FILE};
use serde::Serialize;
use tempfile::TempDir;

/// Three skills with distinct ids.
#[must_use]
pub fn sample_skills() -> Vec<SkillData> {
    vec![
        SkillData::new("s1", "Bite"),
        SkillData::new("s2", "Flame Burst"),
        SkillData::new("s3", "Frost Fang"),
    ]
}

/// A small evolution line whose references all resolve against [`sample_skills`].
#[must_use]
pub fn sample_pets() -> Vec<SoulPetData> {
    vec![
        SoulPetData::new("p1", "Ember Fox")
            .with_skill(PetSkill::new("s1", "Bite"))
            .with_evolution(Evolution::new("p2"))
            .with_evolution(Evolution::new("p3")),
        SoulPetData::new("p2", "Blaze Fox")
            .with_skill(PetSkill::new("s1", "Bite"))
            .with_skill(PetSkill::new("s2", "Flame Burst")),
        SoulPetData::new("p3", "Rime Fox").with_skill(PetSkill::new("s3", "Frost Fang")),
    ]
}

/// A temporary directory holding a pets file and a skills file.
///
/// The directory is removed when this value is dropped.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// Create an empty temporary data directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp data dir"),
        }
    }

    /// Create a directory with both collections written as JSON.
    #[must_use]
    pub fn with_json(pets: &[SoulPetData], skills: &[SkillData]) -> Self {
        let data = Self::new();
        data.write_json(PETS_FILE, pets);
        data.write_json(SKILLS_FILE, skills);
        data
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default pets file.
    #[must_use]
    pub fn pets_path(&self) -> PathBuf {
        self.dir.path().join(PETS_FILE)
    }

    /// Path of the default skills file.
    #[must_use]
    pub fn skills_path(&self) -> PathBuf {
        self.dir.path().join(SKILLS_FILE)
    }

    /// Serialize `value` as pretty JSON into `file_name`.
    ///
    /// # Panics
    ///
    /// Panics if serialization or the write fails.
    pub fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> PathBuf {
        let contents = serde_json::to_string_pretty(value).expect("serialize fixture as JSON");
        self.write_raw(file_name, &contents)
    }

    /// Serialize `value` as RON into `file_name`.
    ///
    /// # Panics
    ///
    /// Panics if serialization or the write fails.
    pub fn write_ron<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> PathBuf {
        let contents = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
            .expect("serialize fixture as RON");
        self.write_raw(file_name, &contents)
    }

    /// Write `contents` verbatim into `file_name`.
    ///
    /// # Panics
    ///
    /// Panics if the write fails.
    pub fn write_raw(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}
