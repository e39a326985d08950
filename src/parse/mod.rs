//! Parsing module for Lyrics Lab
//!
//! This module contains the reverse direction of the prompt transform:
//! recovering song sections from (possibly hand-edited) prompt text.

pub mod errors;
pub mod prompt;

// Re-export commonly used types
pub use errors::ImportError;
pub use prompt::{header_label, parse_lyrics_block, ImportedSections};
