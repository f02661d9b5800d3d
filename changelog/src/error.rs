use thiserror::Error;

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Could not match a change_type with {0}")]
    UnrecognizedCategory(String),

    #[error("Failed to find version {0} in changelog")]
    MissingVersionSection(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// The raw category label behind an `UnrecognizedCategory`, looking through context.
    #[must_use]
    pub fn unrecognized_label(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedCategory(label) => Some(label),
            Self::WithContext(_, err) => err.unrecognized_label(),
            _ => None,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::UnrecognizedCategory(label) => format!(
                "Unknown change category '{label}' (expected one of: fix, breaking, feat, refactor, perf, test, build, ci, chore)"
            ),
            Self::MissingVersionSection(version) => {
                format!("Version {version} was not found in the changelog")
            }
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
