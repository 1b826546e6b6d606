use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing the copy with a zip.
    /// Returns the path of the file actually written.
    pub fn backup(pool: &mut DbPool, cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest_buf = expand_tilde(dest_file);
        let dest = dest_buf.as_path();

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Overwrite confirmation
        let final_target = if compress { dest.with_extension("zip") } else { dest.to_path_buf() };
        ensure_writable(&final_target, force)?;

        // 4️⃣ Copy database (staged next to the zip when compressing into a .zip name)
        let copy_path = if compress && dest.extension().is_some_and(|e| e == "zip") {
            dest.with_extension("sqlite")
        } else {
            dest.to_path_buf()
        };
        fs::copy(src, &copy_path)?;
        if !compress {
            success(format!("Backup created: {}", copy_path.display()));
        }

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&copy_path)?;
            if let Err(e) = fs::remove_file(&copy_path) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            compressed
        } else {
            copy_path
        };

        // 6️⃣ Log in DB
        ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rcigarlog.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
