use crate::errors::{AppError, AppResult};
use crate::store::oplog;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest`, optionally as a zip archive.
    /// Returns the path actually written.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check data file exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "data file not found: {}",
                src.display()
            )));
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 2️⃣ Never overwrite silently
        if final_path.exists() {
            if !force {
                return Err(AppError::Backup(format!(
                    "'{}' already exists (use --force to overwrite)",
                    final_path.display()
                )));
            }
            warning(format!("Overwriting '{}'", final_path.display()));
        }

        // 3️⃣ Ensure destination folder exists
        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_into(src, &final_path)?;
            info(format!("📦 Compressed: {}", final_path.display()));
        } else {
            fs::copy(src, &final_path)?;
        }
        success(format!("Backup created: {}", final_path.display()));

        // 5️⃣ Internal log (not blocking)
        if let Err(e) = oplog::ttlog(
            &oplog::log_path_for(src),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

/// Store `src` as the single entry of a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| crate::config::DEFAULT_DATA_FILE.to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(())
}
