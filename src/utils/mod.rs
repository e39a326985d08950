//! Utility modules for Lyrics Lab
//!
//! This module contains helpers that analyse lyric text.

pub mod text_stats;

// Re-export commonly used types
pub use text_stats::*;
