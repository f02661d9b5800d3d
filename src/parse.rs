use crate::error::{CliError, Result};
use changelog::{Changelog, ChangelogConfig};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

fn open(file: &Path, config: ChangelogConfig) -> Result<Changelog> {
    Changelog::new(file, config).map_err(CliError::from)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn execute(file: &Path, config: ChangelogConfig, blocks: bool) -> Result<()> {
    let changelog = open(file, config)?;

    if blocks {
        let limit = changelog.config().limit.unwrap_or(usize::MAX);
        let blocks: Vec<_> = changelog.blocks().take(limit).collect();
        info!(count = blocks.len(), "segmented changelog");
        return print_json(&blocks);
    }

    let trees = changelog
        .selected_trees()
        .map_err(|e| CliError::from(e).with_context(file.display().to_string()))?;
    info!(count = trees.len(), "parsed changelog");
    print_json(&trees)
}

pub fn latest(file: &Path, config: ChangelogConfig) -> Result<()> {
    let changelog = open(file, config)?;
    let tree = changelog
        .latest()
        .map_err(|e| CliError::from(e).with_context(file.display().to_string()))?;
    print_json(&tree)
}
