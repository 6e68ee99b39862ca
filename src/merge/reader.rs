//! Reading one source file as text.

use std::path::Path;
use thiserror::Error;

/// Why a qualifying file could not be merged.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Read the whole file and decode it strictly as UTF-8.
///
/// The content is returned unchanged; a byte-order mark or CRLF line endings
/// are kept as they are on disk.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
