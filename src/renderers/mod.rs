//! Renderers module for Lyrics Lab
//!
//! This module contains the output formats derived from a song document:
//! the generation prompt, the plain-text lyric sheet and structured exports.

pub mod prompt;
pub mod text;
pub mod structured;

// Re-export commonly used functions
pub use prompt::{generate_prompt, render_section, render_sections, style_description};
pub use text::{export_file_name, to_plain_text};
pub use structured::{to_json, to_yaml};
