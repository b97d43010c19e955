//! Id lookup indexes over loaded records.

use std::collections::HashMap;

use crate::data::Record;
use crate::error::{DataError, Result};

/// What to do when two records in one collection share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one.
    #[default]
    LastWins,
    /// Fail with [`DataError::DuplicateId`].
    Reject,
}

/// Lookup from record id to record, borrowed from the loaded collection.
#[derive(Debug)]
pub struct RecordIndex<'a, T> {
    records: HashMap<&'a str, &'a T>,
}

impl<'a, T: Record> RecordIndex<'a, T> {
    /// Index `records` by id.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateId`] under [`DuplicatePolicy::Reject`]
    /// when an id appears twice.
    pub fn build(records: &'a [T], policy: DuplicatePolicy) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            if let Some(previous) = index.insert(record.id(), record) {
                match policy {
                    DuplicatePolicy::LastWins => tracing::debug!(
                        "Duplicate {} ID '{}': '{}' replaces '{}'",
                        T::COLLECTION,
                        record.id(),
                        record.name(),
                        previous.name()
                    ),
                    DuplicatePolicy::Reject => {
                        return Err(DataError::DuplicateId {
                            collection: T::COLLECTION,
                            id: record.id().to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self { records: index })
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.records.get(id).copied()
    }

    /// Check if an id is indexed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SkillData;

    fn skills() -> Vec<SkillData> {
        vec![
            SkillData::new("s1", "Bite"),
            SkillData::new("s2", "Flame"),
            SkillData::new("s1", "Savage Bite"),
        ]
    }

    #[test]
    fn test_last_wins_keeps_later_record() {
        let skills = skills();
        let index = RecordIndex::build(&skills, DuplicatePolicy::LastWins).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("s1").map(|s| s.name.as_str()), Some("Savage Bite"));
        assert!(index.contains("s2"));
        assert!(!index.contains("s3"));
    }

    #[test]
    fn test_reject_fails_on_duplicate() {
        let skills = skills();
        let err = RecordIndex::build(&skills, DuplicatePolicy::Reject).unwrap_err();

        match err {
            DataError::DuplicateId { collection, id } => {
                assert_eq!(collection, "skill");
                assert_eq!(id, "s1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_collection() {
        let index = RecordIndex::<SkillData>::build(&[], DuplicatePolicy::Reject).unwrap();
        assert!(index.is_empty());
    }
}
