//! Reading source files from disk.

use std::io;
use std::path::Path;

/// A source file that could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source },
        }
    }
}

/// Read the whole file at `path` as raw bytes.
///
/// No encoding is assumed: a file that is not valid UTF-8 still loads, and
/// its stray bytes are reported by the tokenizer instead.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    let source = std::fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    tracing::debug!(bytes = source.len(), "source loaded");
    Ok(source)
}
