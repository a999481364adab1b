//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past the policy's size limit it is shifted to
//! `<name>.1`, the previous `<name>.1` to `<name>.2`, and so on; the backup
//! beyond the retention count is deleted. Rotation happens before a write, so a
//! single line is never split across files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file is larger than this.
    pub max_bytes: u64,
    /// Numbered backups retained after rotation.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct FileWriter {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, writing or flushing fails, or
    /// if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = backup_path(&self.path, self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.policy.max_backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, backup_path(&self.path, 1))
    }
}

/// `<path>.<index>`, e.g. `country-picker-otlp.json.2`.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
