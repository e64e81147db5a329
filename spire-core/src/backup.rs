use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies `path` to `path.N` for the smallest `N >= 1` not already taken.
///
/// Purely additive: existing backups are never read, overwritten or deleted,
/// and every call picks a fresh index. Returns the path of the new backup.
pub fn make_backup(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        bail!("source file does not exist: {}", path.display());
    }

    let mut counter: u32 = 1;
    let backup_path = loop {
        let candidate = numbered(path, counter);
        if !candidate.exists() {
            break candidate;
        }
        counter += 1;
    };

    fs::copy(path, &backup_path).with_context(|| {
        format!(
            "failed to back up {} to {}",
            path.display(),
            backup_path.display()
        )
    })?;

    Ok(backup_path)
}

fn numbered(path: &Path, n: u32) -> PathBuf {
    let mut full = OsString::from(path.as_os_str());
    full.push(format!(".{n}"));
    PathBuf::from(full)
}
