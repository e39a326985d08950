//! Error types for prompt import
//!
//! Both conditions are non-fatal notices: the caller shows the message and
//! leaves the document untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// No `[Lyrics]` marker, or nothing but whitespace after it
    #[error("Could not find [Lyrics] block in the prompt.")]
    NoLyricsBlock,

    /// The block was found but no header resolved to a known section kind
    #[error("No recognizable sections (e.g., [Verse], [Chorus]) found in the [Lyrics] block.")]
    NoRecognizableSections,
}
