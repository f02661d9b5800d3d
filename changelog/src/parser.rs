use tracing::debug;

use crate::category::transform_change_type;
use crate::error::ChangelogError;
use crate::regex_utils::{parse_md_change_type, parse_md_message, parse_md_version};
use crate::types::*;
use crate::utils::{CATEGORY_HEADER_PREFIX, ENTRY_PREFIX, VERSION_HEADER_PREFIX};

/// What a block line is, judged by its prefix alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    VersionHeader,
    CategoryHeader,
    Entry,
    Other,
}

impl LineKind {
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if line.starts_with(VERSION_HEADER_PREFIX) {
            Self::VersionHeader
        } else if line.starts_with(CATEGORY_HEADER_PREFIX) {
            Self::CategoryHeader
        } else if line.starts_with(ENTRY_PREFIX) {
            Self::Entry
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ParserState {
    current_change_type: Option<ChangeType>,
}

/// Builds a [`VersionTree`] out of a single version block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockParser;

impl BlockParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns `UnrecognizedCategory` when a `### ` header cannot be
    /// normalized. No tree is produced for the block in that case.
    pub fn parse<S: AsRef<str>>(&self, block: &[S]) -> Result<VersionTree> {
        let mut tree = VersionTree::default();
        let mut state = ParserState::default();

        for line in block {
            self.parse_line(line.as_ref(), &mut state, &mut tree)?;
        }

        Ok(tree)
    }

    fn parse_line(&self, line: &str, state: &mut ParserState, tree: &mut VersionTree) -> Result<()> {
        match LineKind::classify(line) {
            LineKind::VersionHeader => self.handle_version_header(line, state, tree),
            LineKind::CategoryHeader => self.handle_category_header(line, state)?,
            LineKind::Entry => self.handle_item_line(line, state, tree),
            LineKind::Other => self.handle_other_line(line),
        }
        Ok(())
    }

    fn handle_version_header(&self, line: &str, state: &mut ParserState, tree: &mut VersionTree) {
        state.current_change_type = None;
        if let Some(meta) = parse_md_version(line) {
            tree.version = meta.version;
            tree.date = meta.date;
        }
    }

    fn handle_category_header(&self, line: &str, state: &mut ParserState) -> Result<()> {
        let Some(label) = parse_md_change_type(line) else {
            debug!(line, "skipping category header outside the grammar");
            return Ok(());
        };

        // Report the whole header text, not just the matched token
        let change_type = transform_change_type(&label).map_err(|_| {
            let header = line.strip_prefix(CATEGORY_HEADER_PREFIX).unwrap_or(line);
            ChangelogError::UnrecognizedCategory(header.to_string())
        })?;
        state.current_change_type = Some(change_type);
        Ok(())
    }

    fn handle_item_line(&self, line: &str, state: &ParserState, tree: &mut VersionTree) {
        let fields = parse_md_message(line).unwrap_or_default();
        tree.commits.push(ChangeEntry {
            scope: fields.scope,
            message: fields.message,
            change_type: state.current_change_type,
        });
    }

    fn handle_other_line(&self, line: &str) {
        debug!(line, "unclassified changelog line");
    }
}

/// Builds the tree of one version block. See [`BlockParser`].
///
/// # Errors
///
/// Propagates `UnrecognizedCategory` from the category normalizer.
pub fn generate_block_tree<S: AsRef<str>>(block: &[S]) -> Result<VersionTree> {
    BlockParser::new().parse(block)
}
