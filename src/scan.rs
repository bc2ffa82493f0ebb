use crate::config::Settings;
use crate::error::{HeatError, Result};
use crate::registry::Registry;
use anyhow::Context;
use console::style;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory names that are never descended into.
pub const PRUNED_DIRS: [&str; 3] = [".git", "vendor", "node_modules"];

fn is_pruned(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| PRUNED_DIRS.contains(&name))
}

/// Every directory under `root` (root included) that holds a `.git`
/// directory. Nested repositories are reported too.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let root: PathBuf = root.components().collect();
    if root.exists() && !root.is_dir() {
        return Err(HeatError::NotADirectory(root));
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_pruned(entry))
        .build();

    let mut repositories = Vec::new();
    for entry in walker {
        let entry = entry.map_err(HeatError::Scan)?;
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            debug!(path = %entry.path().display(), "found repository");
            repositories.push(entry.into_path());
        }
    }

    Ok(repositories)
}

pub fn exec(settings: &Settings, root: &Path) -> anyhow::Result<()> {
    let root = std::fs::canonicalize(root)
        .with_context(|| format!("Failed to resolve {}", root.display()))?;

    println!("{}", style("Found folders").bold());
    let found = find_repositories(&root).context("Failed to scan for repositories")?;
    for path in &found {
        println!("{}", path.display());
    }

    let registry = Registry::new(&settings.registry);
    let new: Vec<String> = found
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect();
    let stored = registry
        .merge(&new)
        .with_context(|| format!("Failed to update {}", registry.path().display()))?;
    info!(found = found.len(), stored = stored.len(), "repository list updated");

    println!("\n\n{}\n", style("Successfully added").green());
    Ok(())
}
