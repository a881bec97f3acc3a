//! File system vault: a directory of markdown notes.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use jstamp_core::error::{JstampError, Result};
use jstamp_core::DailyNoteStore;

/// Directory inside the vault root holding jstamp's own files.
pub const STATE_DIR: &str = ".jstamp";

/// A vault rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open an existing vault directory.
    ///
    /// # Errors
    ///
    /// Returns [`JstampError::Vault`] if `root` is not an existing directory.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(JstampError::Vault(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(STATE_DIR).join("config.toml")
    }

    /// Map a `/`-separated vault-relative path to a path under the root.
    ///
    /// Returns `None` for empty or absolute paths and for anything with
    /// `.` or `..` components, so lookups never leave the vault.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        if relative.is_empty() {
            return None;
        }
        let rel = Path::new(relative);
        if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

impl DailyNoteStore for Vault {
    type Handle = PathBuf;

    fn get_document_by_path(&self, path: &str) -> Option<PathBuf> {
        let full = self.resolve(path)?;
        if full.is_file() {
            Some(full)
        } else {
            debug!(path, "no document at path");
            None
        }
    }

    fn read_text(&self, handle: &PathBuf) -> Result<String> {
        Ok(fs::read_to_string(handle)?)
    }

    fn overwrite_text(&mut self, handle: &PathBuf, text: &str) -> Result<()> {
        fs::write(handle, text)?;
        Ok(())
    }
}
