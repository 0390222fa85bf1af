//! Plain file utilities.
//!
//! Thin wrappers over `std::fs` with no invariants of their own; they exist
//! so call sites read as intent rather than plumbing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Reads the entire contents of a file as a string.
pub fn read(path: impl AsRef<Path>) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Writes `content` to the file, overwriting if it exists.
pub fn write(path: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}

/// Appends `content` to the end of the file, creating it if necessary.
pub fn append(path: impl AsRef<Path>, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(content.as_bytes())
}

/// True if a file or directory exists at `path`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// True if `path` is a regular file with a `.md` extension.
pub fn is_markdown(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.is_file() && path.extension().map(|ext| ext == "md").unwrap_or(false)
}
