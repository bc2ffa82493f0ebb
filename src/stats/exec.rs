use super::{aggregate, build, render, FailurePolicy, Palette};
use crate::calendar::Today;
use crate::config::Settings;
use crate::git::GitSource;
use crate::registry::Registry;
use anyhow::Context;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

pub fn exec(settings: &Settings, email: &str, policy: FailurePolicy) -> anyhow::Result<()> {
    let registry = Registry::new(&settings.registry);
    let repositories: Vec<PathBuf> = registry
        .load()
        .with_context(|| format!("Failed to read repository list {}", registry.path().display()))?
        .into_iter()
        .map(PathBuf::from)
        .collect();

    info!(count = repositories.len(), email, "aggregating commits");

    let today = Today::now();
    let counts = aggregate(&GitSource, email, &repositories, &today, policy)
        .context("Failed to collect commits from repositories")?;
    let columns = build(&counts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &columns, &today, &Palette::new(settings.color))?;
    writeln!(
        out,
        "\n{} commits by {} across {} repositories",
        style(counts.total()).bold(),
        email,
        repositories.len()
    )?;

    Ok(())
}
