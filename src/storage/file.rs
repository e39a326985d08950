//! Directory-backed draft store: one `<key>.json` file per key

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{DraftStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DraftStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        fs::write(self.path_for(key), value).map_err(write_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
