//! Parses a markdown changelog into one tree per released version.
//!
//! A changelog is grouped by version (`## 1.2.1 (2019-07-20)`), then by
//! category (`### Bug fixes`), then by entry (`- **scope**: message`).
//! Parsing is lazy: blocks are cut and trees are built only as the caller
//! pulls them, so asking for the latest release never parses the older
//! sections. [`Changelog::new`] still reads the whole file into memory.
//!
//! ```
//! use changelog::{ChangeType, find_version_blocks_in_str, generate_full_tree};
//!
//! let content = "## 1.2.1 (2019-07-20)\n\n### Bug fixes\n\n- username validation not working\n";
//! let trees = generate_full_tree(find_version_blocks_in_str(content))
//!     .collect::<changelog::Result<Vec<_>>>()
//!     .unwrap();
//!
//! assert_eq!(trees[0].version.as_deref(), Some("1.2.1"));
//! assert_eq!(trees[0].commits[0].change_type, Some(ChangeType::Fix));
//! ```

mod blocks;
mod category;
mod config;
mod core;
mod error;
mod forest;
mod parser;
mod regex_utils;
mod types;
mod utils;

pub use blocks::{VersionBlocks, find_version_blocks, find_version_blocks_in_str};
pub use category::transform_change_type;
pub use config::ChangelogConfig;
pub use crate::core::Changelog;
pub use error::ChangelogError;
pub use forest::{VersionTrees, generate_full_tree, generate_partial_tree};
pub use parser::{BlockParser, LineKind, generate_block_tree};
pub use regex_utils::{parse_md_change_type, parse_md_message, parse_md_version};
pub use types::*;
