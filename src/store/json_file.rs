use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::FillUp;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Records stored as a single JSON array, rewritten in full on every persist.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<FillUp>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // `init` leaves an empty file behind
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| AppError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&mut self, records: &[FillUp]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;

        // write aside then swap, so a crash never leaves a half-written file
        let tmp_path = self.path.with_extension("tmp");
        let swapped = fs::write(&tmp_path, json).and_then(|_| fs::rename(&tmp_path, &self.path));

        if let Err(e) = swapped {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }
}
