//! Remembered file-chooser directories.
//!
//! # Responsibility
//! - Keep the last-used import and export directories across runs.
//! - Hold them in an explicit state object instead of process globals.
//!
//! # Invariants
//! - Each directory is one small plain-text file holding a single path line.
//! - A missing or unreadable file degrades to the user's home directory.
//! - Files are rewritten only after a successful import/export.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the last successful import directory.
pub const LAST_IMPORT_DIR_FILE: &str = "last_import_dir";

/// File holding the last successful export directory.
pub const LAST_EXPORT_DIR_FILE: &str = "last_export_dir";

/// Last-used chooser directories, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberedDirs {
    data_dir: PathBuf,
    import_dir: PathBuf,
    export_dir: PathBuf,
}

impl RememberedDirs {
    /// Loads remembered directories from `data_dir`.
    ///
    /// Absent or unreadable preference files fall back to the home
    /// directory, matching a first run.
    pub fn load(data_dir: &Path) -> Self {
        let import_dir =
            read_dir_file(&data_dir.join(LAST_IMPORT_DIR_FILE)).unwrap_or_else(default_dir);
        let export_dir =
            read_dir_file(&data_dir.join(LAST_EXPORT_DIR_FILE)).unwrap_or_else(default_dir);
        Self {
            data_dir: data_dir.to_path_buf(),
            import_dir,
            export_dir,
        }
    }

    /// Directory offered for the next import.
    pub fn import_dir(&self) -> &Path {
        &self.import_dir
    }

    /// Directory offered for the next export.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Records a completed import's directory and persists it.
    pub fn remember_import_dir(&mut self, dir: &Path) {
        self.import_dir = dir.to_path_buf();
        write_dir_file(&self.data_dir.join(LAST_IMPORT_DIR_FILE), dir);
    }

    /// Records a completed export's directory and persists it.
    pub fn remember_export_dir(&mut self, dir: &Path) {
        self.export_dir = dir.to_path_buf();
        write_dir_file(&self.data_dir.join(LAST_EXPORT_DIR_FILE), dir);
    }
}

fn default_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn read_dir_file(path: &Path) -> Option<PathBuf> {
    let text = fs::read_to_string(path).ok()?;
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    Some(PathBuf::from(line))
}

fn write_dir_file(path: &Path, dir: &Path) {
    if let Err(err) = fs::write(path, format!("{}\n", dir.display())) {
        warn!(
            "event=prefs_write module=prefs status=error path={} error={err}",
            path.display()
        );
    }
}
