// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use crate::csv::write_table;
use crate::config::options::ExportFormat;
use crate::error::Result;
use crate::store::Dataset;

/// Write one export file, creating parent directories as needed.
/// Returns the path written to.
pub fn write_dataset(path: &Path, data: &Dataset, format: ExportFormat) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_table(out, data, format.delim())?;
    logf!("Wrote {} rows to {}", data.rows.len(), path.display());
    Ok(path.to_path_buf())
}

/// `user_o` may name a file or a directory (trailing separator or existing dir);
/// directories get `default_filename` appended. Empty means `default_filename`.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> io::Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
