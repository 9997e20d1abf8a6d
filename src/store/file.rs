//! JSON file store.

use super::{StatusStore, StoreError};
use crate::checkpoint::Checkpoint;
use crate::status::Status;
use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the status as a JSON [`Checkpoint`] in a single file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous status intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store backed by `path`. Parent directories are created on save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The checkpoint file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl StatusStore for FileStore {
    fn load(&self) -> Result<Option<Status>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&self.path)(err)),
        };
        let checkpoint = Checkpoint::from_json(&content)?;
        debug!(path = %self.path.display(), id = %checkpoint.id, "loaded status checkpoint");
        Ok(Some(checkpoint.status))
    }

    fn save(&mut self, status: &Status) -> Result<(), StoreError> {
        let checkpoint = Checkpoint::new(status.clone(), Utc::now());
        let json = checkpoint.to_json()?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_error(dir))?;
        }
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(io_error(&temp))?;
        fs::rename(&temp, &self.path).map_err(io_error(&self.path))?;

        debug!(path = %self.path.display(), id = %checkpoint.id, "saved status checkpoint");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{Exposed, IsolationPolicy};
    use chrono::TimeZone;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("status.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("status.json");
        let exposure = Utc.with_ymd_and_hms(2020, 4, 1, 7, 0, 0).unwrap();
        let exposed = Status::Exposed(Exposed::new(exposure, &IsolationPolicy::default()).unwrap());

        let mut store = FileStore::new(&path);
        store.save(&exposed).unwrap();
        assert!(path.exists());
        assert!(!store.temp_path().exists());

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(exposed));
    }

    #[test]
    fn corrupt_file_is_a_checkpoint_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Checkpoint(_)));
    }
}
