//! Record collection loading from data files.
//!
//! Each file holds one sequence of records. The format is picked from the
//! file extension: `.ron` is RON, anything else is JSON.

use std::io::{self, Read};
use std::path::Path;

use dream_core::error::{DataError, Result};
use serde::de::DeserializeOwned;

/// Structured-data format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// JSON document.
    Json,
    /// Rusty Object Notation document.
    Ron,
}

impl DataFormat {
    /// Pick the format for `path` from its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Json,
        }
    }

    /// Parse `contents` as a sequence of records.
    fn parse<T: DeserializeOwned>(self, contents: &str) -> std::result::Result<Vec<T>, String> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Self::Ron => ron::Options::default()
                .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
                .from_str(contents)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Load a collection of records from a data file.
///
/// # Arguments
///
/// * `path` - Path to a JSON or RON file containing a sequence of records.
///
/// # Errors
///
/// Returns [`DataError::MissingFile`] if the file does not exist,
/// [`DataError::ReadFailed`] if it cannot be read, and
/// [`DataError::MalformedData`] if it is not UTF-8 or does not parse.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let path_str = path.display().to_string();

    let mut file = std::fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataError::MissingFile {
            path: path_str.clone(),
        },
        _ => DataError::ReadFailed {
            path: path_str.clone(),
            source: e,
        },
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| match e.kind() {
        // Not UTF-8, so it cannot be a structured-data document.
        io::ErrorKind::InvalidData => DataError::MalformedData {
            path: path_str.clone(),
            message: e.to_string(),
        },
        _ => DataError::ReadFailed {
            path: path_str.clone(),
            source: e,
        },
    })?;

    let records = DataFormat::from_path(path)
        .parse(&contents)
        .map_err(|message| DataError::MalformedData {
            path: path_str.clone(),
            message,
        })?;

    Ok(records)
}
