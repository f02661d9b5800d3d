use crate::types::{MessageFields, VersionMetadata};
use crate::utils::{CHANGELOG_CATEGORY_PATTERN, CHANGELOG_ITEM_PATTERN, VERSION_HEADER_PATTERN};
use regex::Captures;

fn named(captures: &Captures, name: &str) -> Option<String> {
    captures.name(name).map(|m| m.as_str().to_string())
}

/// Extracts `version` and `date` from a `## ` header. `None` when the line does not match.
pub fn parse_md_version(line: &str) -> Option<VersionMetadata> {
    VERSION_HEADER_PATTERN
        .captures(line)
        .map(|captures| VersionMetadata {
            version: named(&captures, "version"),
            date: named(&captures, "date"),
        })
}

/// Extracts the raw category label from a `### ` header.
pub fn parse_md_change_type(line: &str) -> Option<String> {
    CHANGELOG_CATEGORY_PATTERN
        .captures(line)
        .and_then(|captures| named(&captures, "change_type"))
}

/// Extracts the optional bold scope and the message from a `- ` entry.
pub fn parse_md_message(line: &str) -> Option<MessageFields> {
    CHANGELOG_ITEM_PATTERN
        .captures(line)
        .map(|captures| MessageFields {
            scope: named(&captures, "scope"),
            message: named(&captures, "message").unwrap_or_default(),
        })
}
