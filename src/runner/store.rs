use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Trait for reading and writing target files (for testability).
pub trait FileStore: Send + Sync {
    /// Read file contents as bytes.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the contents of an existing file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// Real filesystem implementation of `FileStore`.
///
/// Writes go to a temporary file next to the real file, which is then renamed
/// over it, so a file is either fully updated or untouched. Symlinks are
/// resolved first: the link stays in place and its destination is updated.
/// The original permissions are carried over.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let real = dunce::canonicalize(path)?;
        let permissions = fs::metadata(&real)?.permissions();
        let dir = real.parent().unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content)?;
        temp.as_file().sync_all()?;
        temp.as_file().set_permissions(permissions)?;
        temp.persist(&real).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
