//! Document read/write.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage-level error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but is not valid JSON of the expected shape.
    /// Not locally recoverable; the operation aborts and the error is
    /// surfaced to the caller.
    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the document at `path`, or produce `default` when the file does
/// not exist.
///
/// A missing file means "first run", not an error.
pub fn load_document<T, F>(path: &Path, default: F) -> Result<T, StorageError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    if !path.exists() {
        tracing::debug!(path = %path.display(), "document missing, using default");
        return Ok(default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "document loaded");
    Ok(value)
}

/// Overwrite the document at `path` with `value` as pretty-printed JSON.
///
/// The document is written to a sibling temp file and renamed over the
/// target, so a crash mid-write leaves the previous contents intact.
pub fn save_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    let file = File::create(&tmp)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(std::io::Error::from)?;
    writer.flush()?;
    fs::rename(&tmp, path)?;

    tracing::debug!(path = %path.display(), "document saved");
    Ok(())
}
