//! Directory-backed key-value store.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use super::KeyValueStore;
use crate::error::{ItineraryError, Result, StorageResultExt};

/// A [`KeyValueStore`] keeping each key in its own `<key>.json` file.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the value files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`.
    ///
    /// ASCII letters, digits, `.` and `-` are kept; every other byte,
    /// including `_`, is written as `_` plus two hex digits. Distinct keys
    /// therefore never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-') {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("_{byte:02x}"));
            }
        }
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ItineraryError::storage(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        fs::create_dir_all(&self.dir).storage_context(key)?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).storage_context(key)?;
        fs::rename(&staging, &path).storage_context(key)?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
