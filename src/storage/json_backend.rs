use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    domain::Store,
    errors::{Result, TrackerError},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// JSON-file persistence for the expense document.
///
/// There is no locking: concurrent processes saving the same file race and
/// the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStore {
    /// Returns the stored document, or an empty default when the backing
    /// file does not exist yet. Loading never creates the file.
    fn load(&self) -> Result<Store> {
        if !self.path.exists() {
            return Ok(Store::default());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|err| TrackerError::StorageRead(err.to_string()))?;
        serde_json::from_str(&data).map_err(|err| TrackerError::StorageRead(err.to_string()))
    }

    /// Serializes the full document and replaces the backing file via a
    /// temp-file rename, creating the containing directory first. A failed
    /// save leaves the previous file untouched.
    fn save(&self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(store)
            .map_err(|err| TrackerError::StorageWrite(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path).map_err(|err| TrackerError::StorageWrite(err.to_string()))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| TrackerError::StorageWrite(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|err| TrackerError::StorageWrite(err.to_string()))?;
    file.write_all(data.as_bytes())
        .map_err(|err| TrackerError::StorageWrite(err.to_string()))?;
    file.flush()
        .map_err(|err| TrackerError::StorageWrite(err.to_string()))
}
