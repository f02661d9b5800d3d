use once_cell::sync::Lazy;
use regex::Regex;

pub const VERSION_HEADER_PREFIX: &str = "## ";
pub const CATEGORY_HEADER_PREFIX: &str = "### ";
pub const ENTRY_PREFIX: &str = "- ";

/// `## <version>[ (<date>)]`
pub static VERSION_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^##\s(?P<version>[a-zA-Z0-9.+]+)\s?\(?(?P<date>[0-9-]+)?\)?")
        .expect("Failed to compile version header regex")
});

/// `### <change_type>`
pub static CHANGELOG_CATEGORY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^###\s(?P<change_type>[a-zA-Z0-9.+\s]+)")
        .expect("Failed to compile category regex")
});

/// `- [**<scope>**: ]<message>`
pub static CHANGELOG_ITEM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-\s(\*{2}(?P<scope>[a-zA-Z0-9]+)\*{2}:\s)?(?P<message>.+)")
        .expect("Failed to compile item regex")
});
