use crate::error::ChangelogError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// The non-blank lines of one version section, starting at its `## ` header
pub type VersionBlock = Vec<String>;

/// Canonical change categories every `### ` header is normalized into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeType {
    #[serde(rename = "fix")]
    Fix,
    #[serde(rename = "BREAKING CHANGES")]
    BreakingChange,
    #[serde(rename = "feat")]
    Feat,
    #[serde(rename = "refactor")]
    Refactor,
    #[serde(rename = "perf")]
    Perf,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "build")]
    Build,
    #[serde(rename = "ci")]
    Ci,
    #[serde(rename = "chore")]
    Chore,
}

impl ChangeType {
    /// Match tokens in precedence order; the first one found in a label wins.
    pub const CATEGORIES: [(&'static str, ChangeType); 9] = [
        ("fix", Self::Fix),
        ("breaking", Self::BreakingChange),
        ("feat", Self::Feat),
        ("refactor", Self::Refactor),
        ("perf", Self::Perf),
        ("test", Self::Test),
        ("build", Self::Build),
        ("ci", Self::Ci),
        ("chore", Self::Chore),
    ];

    /// Canonical label as written back into a changelog
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::BreakingChange => "BREAKING CHANGES",
            Self::Feat => "feat",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
        }
    }

    pub fn all() -> impl Iterator<Item = ChangeType> {
        Self::CATEGORIES.into_iter().map(|(_, change_type)| change_type)
    }
}

impl Display for ChangeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields captured from a `## ` header line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMetadata {
    pub version: Option<String>,
    pub date: Option<String>,
}

/// Fields captured from a `- ` entry line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFields {
    pub scope: Option<String>,
    pub message: String,
}

/// One bullet of a version section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub message: String,
    pub change_type: Option<ChangeType>,
}

/// Structured form of one version section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionTree {
    pub version: Option<String>,
    pub date: Option<String>,
    pub commits: Vec<ChangeEntry>,
}

impl VersionTree {
    /// Entries tagged with the given category, in document order
    pub fn commits_of(&self, change_type: ChangeType) -> impl Iterator<Item = &ChangeEntry> {
        self.commits
            .iter()
            .filter(move |commit| commit.change_type == Some(change_type))
    }
}
