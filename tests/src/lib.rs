#[cfg(test)]
mod tests {
    use changelog::{ChangeType, Changelog, ChangelogConfig, ChangelogError};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_changelog(dir: &Path) -> std::io::Result<()> {
        let changelog = r"# Changelog

## 0.2.0 (2023-02-01)

### Features

- **parser**: partial changelogs

### Fixes

- blank lines inside sections

## 0.1.0 (2023-01-01)

### Features

- Initial release
";

        fs::write(dir.join("CHANGELOG.md"), changelog)
    }

    #[test]
    fn test_changelog_from_file() {
        let temp_dir = TempDir::new().unwrap();
        create_test_changelog(temp_dir.path()).unwrap();
        let changelog_path = temp_dir.path().join("CHANGELOG.md");

        let changelog = Changelog::new(&changelog_path, ChangelogConfig::default()).unwrap();
        let trees = changelog.collect_trees().unwrap();

        assert_eq!(trees.len(), 3);
        assert_eq!(trees[1].version.as_deref(), Some("0.2.0"));
        assert_eq!(
            trees[1]
                .commits
                .iter()
                .map(|c| (c.scope.as_deref(), c.change_type))
                .collect::<Vec<_>>(),
            vec![
                (Some("parser"), Some(ChangeType::Feat)),
                (None, Some(ChangeType::Fix)),
            ]
        );
    }

    #[test]
    fn test_latest_and_lookup() {
        let temp_dir = TempDir::new().unwrap();
        create_test_changelog(temp_dir.path()).unwrap();
        let changelog_path = temp_dir.path().join("CHANGELOG.md");

        let changelog = Changelog::new(&changelog_path, ChangelogConfig::default()).unwrap();
        assert_eq!(changelog.latest().unwrap().version.as_deref(), Some("0.2.0"));

        let first = changelog.find_version("0.1.0").unwrap();
        assert_eq!(first.date.as_deref(), Some("2023-01-01"));
        assert_eq!(first.commits[0].message, "Initial release");

        assert!(matches!(
            changelog.find_version("1.0.0"),
            Err(ChangelogError::MissingVersionSection(_))
        ));
    }

    #[test]
    fn test_broken_category_aborts_whole_document() {
        let temp_dir = TempDir::new().unwrap();
        let changelog_path = temp_dir.path().join("CHANGELOG.md");
        fs::write(
            &changelog_path,
            "## 0.2.0\n### Features\n- ok\n\n## 0.1.0\n### Miscellaneous\n- bad\n",
        )
        .unwrap();

        let changelog = Changelog::new(&changelog_path, ChangelogConfig::default()).unwrap();
        let err = changelog.collect_trees().unwrap_err();
        assert_eq!(err.unrecognized_label(), Some("Miscellaneous"));

        // A limit that stops before the bad section never sees it
        let mut changelog = changelog;
        changelog.set_config(ChangelogConfig::default().with_limit(1));
        assert_eq!(changelog.collect_trees().unwrap().len(), 1);
    }
}
