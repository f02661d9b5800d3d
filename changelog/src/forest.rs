use crate::parser::BlockParser;
use crate::types::{Result, VersionTree};
use std::iter::{FusedIterator, Take};

/// Lazily turns version blocks into version trees, one block per pull.
///
/// The first error ends the sequence: a changelog with an unrecognized
/// category is abandoned as a whole.
#[derive(Debug)]
pub struct VersionTrees<B> {
    blocks: B,
    parser: BlockParser,
    failed: bool,
}

impl<B> VersionTrees<B> {
    pub fn new(blocks: B) -> Self {
        Self {
            blocks,
            parser: BlockParser::new(),
            failed: false,
        }
    }
}

impl<B, S> Iterator for VersionTrees<B>
where
    B: Iterator<Item = Vec<S>>,
    S: AsRef<str>,
{
    type Item = Result<VersionTree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let block = self.blocks.next()?;
        let tree = self.parser.parse(&block);
        self.failed = tree.is_err();
        Some(tree)
    }
}

impl<B, S> FusedIterator for VersionTrees<B>
where
    B: FusedIterator<Item = Vec<S>>,
    S: AsRef<str>,
{
}

/// Maps every block to its tree, in order.
pub fn generate_full_tree<I, S>(blocks: I) -> VersionTrees<I::IntoIter>
where
    I: IntoIterator<Item = Vec<S>>,
    S: AsRef<str>,
{
    VersionTrees::new(blocks.into_iter())
}

/// Like [`generate_full_tree`] but stops pulling blocks after `limit` trees.
pub fn generate_partial_tree<I, S>(blocks: I, limit: usize) -> Take<VersionTrees<I::IntoIter>>
where
    I: IntoIterator<Item = Vec<S>>,
    S: AsRef<str>,
{
    VersionTrees::new(blocks.into_iter()).take(limit)
}
