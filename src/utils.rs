use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Write a file, replacing it if it exists.
pub(crate) fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, contents)
        .with_context(|| format!("Unable to write to {}", path.display()))
}

/// Open a file for reading. Returns `None` if the file does not exist.
pub(crate) fn open_if_exists(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(f) => Ok(Some(f)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(e).with_context(|| format!("Unable to open file {}", path.display())),
        },
    }
}

/// Create a file for writing, truncating it if it exists.
pub(crate) fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Unable to create file {}", path.display()))
}

/// Read a file to a `String`.
pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file at {}", path.display()))
}
