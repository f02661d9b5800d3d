use crate::error::ChangelogError;
use crate::types::{ChangeType, Result};

/// Maps a free-text category label to its canonical `ChangeType`.
///
/// The label is lowercased and checked against [`ChangeType::CATEGORIES`] in
/// table order; the first token found as a substring wins.
///
/// # Errors
///
/// Returns `UnrecognizedCategory` carrying `label` when no token matches.
pub fn transform_change_type(label: &str) -> Result<ChangeType> {
    let lowered = label.to_lowercase();
    ChangeType::CATEGORIES
        .iter()
        .find(|(token, _)| lowered.contains(token))
        .map(|(_, change_type)| *change_type)
        .ok_or_else(|| ChangelogError::UnrecognizedCategory(label.to_string()))
}
