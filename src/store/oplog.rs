//! Internal operation log: one JSON object per line, next to the data file.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// `carburant.json` → `carburant.log`
pub fn log_path_for(data_file: &Path) -> PathBuf {
    data_file.with_extension("log")
}

/// Append an internal log line.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let id = read_entries(path)?.last().map(|e| e.id + 1).unwrap_or(1);

    let entry = LogEntry {
        id,
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;

    Ok(())
}

/// Read every log line, oldest first. A missing log is empty.
pub fn read_entries(path: &Path) -> AppResult<Vec<LogEntry>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).map_err(|source| AppError::Json {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
