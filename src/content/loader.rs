//! Loading content overrides from disk.
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Content;

/// Failures while reading a content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Content {
    /// Parses a JSON override document. Missing fields keep the built-in
    /// text; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a JSON override file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&raw).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded content overrides from {}", path.display());
        Ok(content)
    }
}
