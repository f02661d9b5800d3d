use crate::types::VersionBlock;
use crate::utils::VERSION_HEADER_PREFIX;
use std::iter::FusedIterator;
use std::mem;
use std::str::Lines;
use tracing::trace;

/// Lazily groups changelog lines into version blocks.
///
/// Every `## ` line opens a new block. Empty lines are dropped. Once the
/// input runs out the pending block is emitted even when it is empty, so a
/// document without any lines still yields exactly one (empty) block.
#[derive(Debug)]
pub struct VersionBlocks<I> {
    lines: I,
    block: VersionBlock,
    finished: bool,
}

impl<I> VersionBlocks<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            block: Vec::new(),
            finished: false,
        }
    }
}

impl<I, L> Iterator for VersionBlocks<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
    type Item = VersionBlock;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            let line = line.as_ref();
            let line = line
                .strip_suffix('\n')
                .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
            if line.is_empty() {
                continue;
            }

            if line.starts_with(VERSION_HEADER_PREFIX) && !self.block.is_empty() {
                let done = mem::replace(&mut self.block, vec![line.to_string()]);
                trace!(lines = done.len(), "version block complete");
                return Some(done);
            }
            self.block.push(line.to_string());
        }

        self.finished = true;
        let done = mem::take(&mut self.block);
        trace!(lines = done.len(), "final version block");
        Some(done)
    }
}

impl<I, L> FusedIterator for VersionBlocks<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
}

/// Splits a sequence of lines into version blocks. See [`VersionBlocks`].
pub fn find_version_blocks<I>(lines: I) -> VersionBlocks<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    VersionBlocks::new(lines.into_iter())
}

/// Splits in-memory changelog text into lines (`\n` or `\r\n`) and groups them into version blocks.
pub fn find_version_blocks_in_str(content: &str) -> VersionBlocks<Lines<'_>> {
    VersionBlocks::new(content.lines())
}
