use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::{RentError, Result};
use crate::ledger::RentLedger;

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// File-backed JSON store for the ledger snapshot. Writes stage to a `.tmp`
/// sibling and rename into place.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &RentLedger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<RentLedger> {
        if !self.path.exists() {
            return Err(RentError::NotFound(format!(
                "ledger file `{}`",
                self.path.display()
            )));
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn load_or_default(&self) -> Result<RentLedger> {
        if !self.path.exists() {
            return Ok(RentLedger::new());
        }
        self.load()
    }
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
