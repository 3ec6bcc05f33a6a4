use crate::error::Result;
use std::fs::FileTimes;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from leaving a corrupt artifact behind.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Copy a single file, overwriting any existing file at `dest` and carrying
/// the source's modification time over to the copy.
///
/// Mtime propagation is best-effort: filesystems that don't report a
/// modification time don't fail the copy.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    std::fs::copy(src, dest)?;
    if let Ok(modified) = std::fs::metadata(src).and_then(|m| m.modified()) {
        let f = std::fs::OpenOptions::new().write(true).open(dest)?;
        f.set_times(FileTimes::new().set_modified(modified))?;
    }
    Ok(())
}

/// Recursively copy the contents of `src` into `dest`.
///
/// Additive: files already present in `dest` but absent from `src` are left
/// in place; files present in both are overwritten. Returns the number of
/// files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            std::fs::create_dir_all(&target)?;
            copied += copy_tree(&entry.path(), &target)?;
        } else {
            copy_file(&entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
