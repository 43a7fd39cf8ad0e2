//! Locked, atomic file replacement shared by the store and the config
//!
//! Writers hold an exclusive lock on `<file>.lock` and write `<file>.tmp`,
//! which is then renamed over the target. Readers never see a partial file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

/// Exclusive cross-process lock, released on drop
#[derive(Debug)]
pub(crate) struct FileLock {
    _file: File,
}

impl FileLock {
    /// Block until the lock guarding `target` is held
    pub(crate) fn acquire(target: &Path) -> io::Result<Self> {
        let path = sibling(target, "lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        file.lock_exclusive()?;
        Ok(Self { _file: file })
    }
}

/// `<file>.<suffix>` next to `target`
pub(crate) fn sibling(target: &Path, suffix: &str) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    target.with_file_name(name)
}

/// Create the parent directory of `target` if it is missing
pub(crate) fn ensure_parent(target: &Path) -> io::Result<()> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Replace `target` with `content` via a synced temp file and a rename.
/// Callers hold the [`FileLock`] for `target`.
pub(crate) fn replace(_lock: &FileLock, target: &Path, content: &[u8]) -> io::Result<()> {
    let temp_path = sibling(target, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;
    drop(temp_file);

    std::fs::rename(&temp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_appends_suffix() {
        let target = Path::new("/data/actions.json");
        assert_eq!(sibling(target, "lock"), PathBuf::from("/data/actions.json.lock"));
        assert_eq!(sibling(Path::new("store"), "tmp"), PathBuf::from("store.tmp"));
    }

    #[test]
    fn test_replace_writes_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("file.json");
        ensure_parent(&target).unwrap();

        let lock = FileLock::acquire(&target).unwrap();
        replace(&lock, &target, b"first").unwrap();
        replace(&lock, &target, b"second").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
        assert!(!sibling(&target, "tmp").exists());
        assert!(sibling(&target, "lock").exists());
    }
}
