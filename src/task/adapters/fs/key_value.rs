//! Directory-backed key-value store.

use std::io::ErrorKind;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::task::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store keeping one file per key inside a directory.
///
/// Access is scoped to the directory handle opened at construction. Each
/// value lives in `<key>.json` and is replaced atomically by writing a
/// temporary sibling file and renaming it over the target.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] if the directory cannot be
    /// opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(KeyValueStoreError::backend)?;
        Ok(Self { dir })
    }

    /// Creates the directory and its parents if missing, then opens it.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Backend`] if the directory cannot be
    /// created or opened.
    pub fn create(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(KeyValueStoreError::backend)?;
        Self::open(path)
    }

    /// Wraps an already opened directory handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Checks that `key` maps to a single plain file name.
fn validate_key(key: &str) -> KeyValueResult<()> {
    let allowed = key
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if key.is_empty() || key.starts_with('.') || !allowed {
        return Err(KeyValueStoreError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

fn file_name(key: &str) -> String {
    format!("{key}.{FILE_EXTENSION}")
}

fn temp_file_name(key: &str) -> String {
    format!(".{key}.{FILE_EXTENSION}.{TEMP_SUFFIX}")
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        validate_key(key)?;
        match self.dir.read_to_string(file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        validate_key(key)?;
        let target = file_name(key);
        let staging = temp_file_name(key);

        self.dir
            .write(&staging, value)
            .map_err(KeyValueStoreError::backend)?;
        if let Err(err) = self.dir.rename(&staging, &self.dir, &target) {
            if let Err(cleanup) = self.dir.remove_file(&staging) {
                debug!(file = %staging, error = %cleanup, "failed to remove staging file");
            }
            return Err(KeyValueStoreError::backend(err));
        }

        debug!(file = %target, bytes = value.len(), "wrote key-value entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        validate_key(key)?;
        match self.dir.remove_file(file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStoreError::backend(err)),
        }
    }
}
