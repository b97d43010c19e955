//! Error types for loading and indexing game data.

use thiserror::Error;

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

/// Fatal errors raised before any reference check runs.
#[derive(Debug, Error)]
pub enum DataError {
    /// Data file does not exist at its resolved path.
    #[error("File not found at {path}")]
    MissingFile {
        /// Path that was looked up.
        path: String,
    },

    /// Data file exists but does not parse as the expected format.
    #[error("Failed to decode data from {path}: {message}")]
    MalformedData {
        /// Path to the file that failed to parse.
        path: String,
        /// Parser error message.
        message: String,
    },

    /// Data file exists but could not be read.
    #[error("Failed to read file '{path}': {source}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Two records in one collection share an id and the index rejects it.
    #[error("Duplicate {collection} ID: {id}")]
    DuplicateId {
        /// Collection the records belong to (e.g. "skill").
        collection: &'static str,
        /// The repeated id.
        id: String,
    },
}

impl DataError {
    /// Path of the offending file, if the error is tied to one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingFile { path }
            | Self::MalformedData { path, .. }
            | Self::ReadFailed { path, .. } => Some(path.as_str()),
            Self::DuplicateId { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = DataError::MissingFile {
            path: "data/skills.json".to_string(),
        };
        assert_eq!(err.to_string(), "File not found at data/skills.json");

        let err = DataError::MalformedData {
            path: "data/soul_pets.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().contains("data/soul_pets.json"));
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn test_duplicate_has_no_path() {
        let err = DataError::DuplicateId {
            collection: "skill",
            id: "s1".to_string(),
        };
        assert_eq!(err.path(), None);
        assert_eq!(err.to_string(), "Duplicate skill ID: s1");
    }
}
