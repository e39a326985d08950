//! Prompt text generation (song document -> bracketed prompt)
//!
//! Output shape:
//!
//! ```text
//! [Style Description: An <mood> <format> in the style of <artist>.]
//!
//! [Lyrics]
//! [Verse]
//! ...
//!
//! [Style Originality: 75%]
//! [Instrumentation Originality: 85%]
//! ```

use crate::models::{PromptControls, Section, SongDocument};

/// Marker opening the lyrics block
pub const LYRICS_MARKER: &str = "[Lyrics]";

/// Prefix of the style originality line (also terminates the lyrics block on import)
pub const STYLE_ORIGINALITY_PREFIX: &str = "[Style Originality";

/// Prefix of the instrumentation originality line
pub const INSTRUMENTATION_ORIGINALITY_PREFIX: &str = "[Instrumentation Originality";

/// Render one section as `[<Label>]\n<content>`
///
/// Content is emitted raw: brackets inside it are not escaped.
pub fn render_section(section: &Section) -> String {
    format!("[{}]\n{}", section.kind.label(), section.content)
}

/// Render all sections, separated by a blank line
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The one-sentence style description. Mood and format are lowercased here only.
pub fn style_description(song: &SongDocument) -> String {
    format!(
        "An {} {} in the style of {}.",
        song.mood.to_lowercase(),
        song.format.to_lowercase(),
        song.artist
    )
}

/// Generate the full prompt text
pub fn generate_prompt(song: &SongDocument, controls: &PromptControls) -> String {
    format!(
        "[Style Description: {}]\n\n{}\n{}\n\n{}: {}%]\n{}: {}%]",
        style_description(song),
        LYRICS_MARKER,
        render_sections(&song.sections),
        STYLE_ORIGINALITY_PREFIX,
        controls.style_originality,
        INSTRUMENTATION_ORIGINALITY_PREFIX,
        controls.instrumentation_originality,
    )
}
