//! Models module for Lyrics Lab
//!
//! This module contains the song document, its sections, the numeric
//! controls and the static structure templates.

pub mod song;
pub mod controls;
pub mod templates;

// Re-export commonly used types
pub use song::*;
pub use controls::*;
pub use templates::{find_template, template_names, StructureTemplate, STRUCTURE_TEMPLATES};
