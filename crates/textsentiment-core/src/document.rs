//! Input document loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("text file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the whole file at `path` as UTF-8 and trims surrounding whitespace.
///
/// The result may be empty; callers decide whether that is acceptable.
///
/// # Errors
///
/// - [`DocumentError::NotFound`] if `path` is not an existing regular file.
/// - [`DocumentError::Read`] if the file cannot be read or is not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    if !path.is_file() {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw.trim().to_string())
}
