use crate::blocks::{VersionBlocks, find_version_blocks_in_str};
use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::forest::VersionTrees;
use crate::types::*;
use std::fs;
use std::iter::Take;
use std::path::{Path, PathBuf};
use std::str::Lines;
use tracing::info;

/// A changelog document held in memory, ready to be parsed lazily
#[derive(Debug, Clone)]
pub struct Changelog {
    path: Option<PathBuf>,
    content: String,
    config: ChangelogConfig,
}

impl Changelog {
    /// Reads a changelog from disk
    ///
    /// # Errors
    /// Returns `ReadError` if the file cannot be read
    pub fn new(path: impl Into<PathBuf>, config: ChangelogConfig) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| {
            ChangelogError::ReadError(e).with_context(format!("{}", path.display()))
        })?;
        info!(path = %path.display(), bytes = content.len(), "read changelog");

        Ok(Self {
            path: Some(path),
            content,
            config,
        })
    }

    /// Wraps changelog text that did not come from a file
    pub fn from_content(content: impl Into<String>, config: ChangelogConfig) -> Self {
        Self {
            path: None,
            content: content.into(),
            config,
        }
    }

    /// Raw line groups, one per version section
    pub fn blocks(&self) -> VersionBlocks<Lines<'_>> {
        find_version_blocks_in_str(&self.content)
    }

    /// Version trees in document order, honoring the configured limit
    pub fn trees(&self) -> Take<VersionTrees<VersionBlocks<Lines<'_>>>> {
        VersionTrees::new(self.blocks()).take(self.config.limit.unwrap_or(usize::MAX))
    }

    /// Collects [`Self::trees`], failing on the first unrecognized category
    ///
    /// # Errors
    /// Returns `UnrecognizedCategory` if any parsed block has an unknown category header
    pub fn collect_trees(&self) -> Result<Vec<VersionTree>> {
        self.trees().collect()
    }

    /// The first tree whose version equals `version`
    ///
    /// # Errors
    /// Returns `MissingVersionSection` when no tree carries that version, or
    /// `UnrecognizedCategory` if a block before it cannot be parsed
    pub fn find_version(&self, version: &str) -> Result<VersionTree> {
        for tree in VersionTrees::new(self.blocks()) {
            let tree = tree?;
            if tree.version.as_deref() == Some(version) {
                return Ok(tree);
            }
        }
        Err(ChangelogError::MissingVersionSection(version.to_string()))
    }

    /// The first tree carrying a version, i.e. the newest release of a
    /// newest-first changelog
    ///
    /// # Errors
    /// Returns `MissingVersionSection` when no block has a parseable version header
    pub fn latest(&self) -> Result<VersionTree> {
        for tree in VersionTrees::new(self.blocks()) {
            let tree = tree?;
            if tree.version.is_some() {
                return Ok(tree);
            }
        }
        Err(ChangelogError::MissingVersionSection("latest".to_string()))
    }

    /// Trees selected by the configuration: the configured version alone
    /// when one is set, otherwise [`Self::collect_trees`]
    ///
    /// # Errors
    /// See [`Self::find_version`] and [`Self::collect_trees`]
    pub fn selected_trees(&self) -> Result<Vec<VersionTree>> {
        match &self.config.version {
            Some(version) => self.find_version(version).map(|tree| vec![tree]),
            None => self.collect_trees(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChangelogConfig) {
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CHANGELOG: &str = r"# Changelog

## 1.2.0 (2020-03-01)

### Features

- **cli**: add --limit

## 1.1.0 (2020-02-01)

### Bug fixes

- handle empty files

## 1.0.0 (2020-01-01)

### Features

- initial release
";

    #[test]
    fn test_new_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        fs::write(&path, CHANGELOG).unwrap();

        let changelog = Changelog::new(&path, ChangelogConfig::default()).unwrap();
        assert_eq!(changelog.path(), Some(path.as_path()));
        assert_eq!(changelog.content(), CHANGELOG);
        // Title block plus three releases
        assert_eq!(changelog.blocks().count(), 4);
    }

    #[test]
    fn test_new_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Changelog::new(temp_dir.path().join("nope.md"), ChangelogConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::WithContext(_, ref inner) if matches!(**inner, ChangelogError::ReadError(_))
        ));
    }

    #[test]
    fn test_limit_makes_partial_changelog() {
        let changelog =
            Changelog::from_content(CHANGELOG, ChangelogConfig::default().with_limit(2));
        let trees = changelog.collect_trees().unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].version, None);
        assert_eq!(trees[1].version.as_deref(), Some("1.2.0"));
    }

    #[test]
    fn test_find_version() {
        let changelog = Changelog::from_content(CHANGELOG, ChangelogConfig::default());
        let tree = changelog.find_version("1.1.0").unwrap();
        assert_eq!(tree.date.as_deref(), Some("2020-02-01"));
        assert_eq!(tree.commits[0].message, "handle empty files");
        assert_eq!(tree.commits[0].change_type, Some(ChangeType::Fix));

        let err = changelog.find_version("9.9.9").unwrap_err();
        assert!(matches!(err, ChangelogError::MissingVersionSection(v) if v == "9.9.9"));
    }

    #[test]
    fn test_latest_skips_preamble() {
        let changelog = Changelog::from_content(CHANGELOG, ChangelogConfig::default());
        let tree = changelog.latest().unwrap();
        assert_eq!(tree.version.as_deref(), Some("1.2.0"));
        assert_eq!(tree.commits[0].scope.as_deref(), Some("cli"));
    }

    #[test]
    fn test_selected_trees_uses_configured_version() {
        let changelog =
            Changelog::from_content(CHANGELOG, ChangelogConfig::default().with_version("1.0.0"));
        let trees = changelog.selected_trees().unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].commits[0].message, "initial release");
    }

    #[test]
    fn test_crlf_messages_have_no_carriage_return() {
        let changelog = Changelog::from_content(
            "## 1.0.0 (2020-01-01)\r\n\r\n### Features\r\n\r\n- add thing\r\n",
            ChangelogConfig::default(),
        );
        let trees = changelog.collect_trees().unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].date.as_deref(), Some("2020-01-01"));
        assert_eq!(trees[0].commits[0].message, "add thing");
        assert_eq!(trees[0].commits[0].change_type, Some(ChangeType::Feat));
    }

    #[test]
    fn test_unknown_category_aborts_collect() {
        let changelog = Changelog::from_content(
            "## 1.0.0\n### Documentation\n- docs\n",
            ChangelogConfig::default(),
        );
        let err = changelog.collect_trees().unwrap_err();
        assert_eq!(err.unrecognized_label(), Some("Documentation"));
    }
}
