//! The persisted list of repositories found by `scan`.
//!
//! Plain text, one path per line. New entries are merged by exact string
//! match and the whole file is rewritten.

use crate::config::Settings;
use crate::error::{HeatError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored path, creating an empty list if there is none yet.
    pub fn load(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.save(&[])?;
                Ok(Vec::new())
            }
            Err(source) => Err(self.error(source)),
        }
    }

    /// Add `new` to the stored list and write the result back.
    pub fn merge(&self, new: &[String]) -> Result<Vec<String>> {
        let existing = self.load()?;
        let joined = join_unique(new, existing);
        self.save(&joined)?;
        Ok(joined)
    }

    fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.error(source))?;
        }
        let mut content = entries.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|source| self.error(source))
    }

    fn error(&self, source: std::io::Error) -> HeatError {
        HeatError::Registry {
            path: self.path.clone(),
            source,
        }
    }
}

/// Append each entry of `new` that `existing` does not already hold.
pub fn join_unique(new: &[String], mut existing: Vec<String>) -> Vec<String> {
    for entry in new {
        if !existing.contains(entry) {
            existing.push(entry.clone());
        }
    }
    existing
}

pub fn list(settings: &Settings) -> anyhow::Result<()> {
    let registry = Registry::new(&settings.registry);
    for entry in registry.load()? {
        println!("{entry}");
    }
    Ok(())
}
