use serde::Deserialize;

/// Options controlling how much of a changelog is turned into trees
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Stop after this many version trees (partial changelog)
    pub limit: Option<usize>,
    /// Only this version is of interest
    pub version: Option<String>,
}

impl ChangelogConfig {
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
