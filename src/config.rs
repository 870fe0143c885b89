//! Options controlling a toggle run.

use crate::format::LineEnding;
use crate::record::RECORD_LENGTH;

/// How the rewritten content reaches the original path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStrategy {
    /// Truncate the file and write into it. A failure mid-write leaves the
    /// file partially written.
    #[default]
    InPlace,
    /// Write a temporary file next to the original and rename it over the
    /// original once the write has succeeded.
    AtomicRename,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOptions {
    pub record_len: usize,
    pub line_ending: LineEnding,
    pub write_strategy: WriteStrategy,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            record_len: RECORD_LENGTH,
            line_ending: LineEnding::default(),
            write_strategy: WriteStrategy::default(),
        }
    }
}
