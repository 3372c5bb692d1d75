// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::WriteError;

/// Write `path` through a sibling temp file: `write_to` fills the temp file,
/// then it is renamed into place. On any failure the temp file is removed and
/// `path` is left untouched.
pub fn write_atomic<F>(path: &Path, write_to: F) -> Result<(), WriteError>
where
    F: FnOnce(&Path) -> Result<(), WriteError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = temp_sibling(path);
    if let Err(e) = write_to(&tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        WriteError::Io { path: path.to_path_buf(), source }
    })
}

/// `out/hvsa.ods` → `out/.hvsa.ods.part`
pub fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.part"))
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    write_atomic(path, |tmp| {
        fs::write(tmp, bytes).map_err(|source| WriteError::Io { path: tmp.to_path_buf(), source })
    })
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() && !dir.is_dir() {
        return Err(WriteError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| WriteError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
