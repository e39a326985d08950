//! Prompt import (bracketed prompt text -> sections)
//!
//! The prompt is read as a line-oriented grammar:
//!
//! ```text
//! ...anything...
//! [Lyrics]
//! [<Label>]          header: a whole line matching ^\[([^\]]+)\]$
//! content lines      until the next header or the end of the block
//! ...
//! [Style Originality...      ends the block (as does end of input)
//! ```
//!
//! A content line that is itself a complete bracket line (e.g. a verse that
//! contains the line `[Chorus]`) cannot be told apart from a header and is
//! read as one. Lines that only start with a bracket (`[whispered] hello`)
//! stay content.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ImportError;
use crate::models::{Section, SectionKind};
use crate::renderers::prompt::{
    INSTRUMENTATION_ORIGINALITY_PREFIX, LYRICS_MARKER, STYLE_ORIGINALITY_PREFIX,
};

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("header pattern is valid"));

/// Sections recovered from a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedSections {
    /// Recognized sections, in text order, each with a fresh id
    pub sections: Vec<Section>,
    /// Header labels that matched no section kind (dropped with their content)
    pub skipped: Vec<String>,
}

impl ImportedSections {
    fn finish_section(&mut self, label: &str, lines: &[&str]) {
        let content = lines.join("\n").trim().to_string();
        match SectionKind::from_label(label) {
            Some(kind) => self.sections.push(Section::new(kind, content)),
            None => {
                log::warn!("Skipping unrecognized section header [{}]", label);
                self.skipped.push(label.to_string());
            }
        }
    }
}

enum ScanState<'a> {
    SeekLyricsBlock,
    SeekHeader,
    AccumulateContent { label: &'a str, lines: Vec<&'a str> },
}

/// Label of a header line, if `line` is one
pub fn header_label(line: &str) -> Option<&str> {
    HEADER_RE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn ends_lyrics_block(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(STYLE_ORIGINALITY_PREFIX) || line.starts_with(INSTRUMENTATION_ORIGINALITY_PREFIX)
}

/// Parse the `[Lyrics]` block of a prompt into sections
pub fn parse_lyrics_block(text: &str) -> Result<ImportedSections, ImportError> {
    let mut state = ScanState::SeekLyricsBlock;
    let mut found_block = false;
    let mut block_has_text = false;
    let mut imported = ImportedSections::default();

    for line in text.lines() {
        if let ScanState::SeekLyricsBlock = state {
            if line.trim() == LYRICS_MARKER {
                found_block = true;
                state = ScanState::SeekHeader;
            }
            continue;
        }

        if ends_lyrics_block(line) {
            break;
        }
        if !line.trim().is_empty() {
            block_has_text = true;
        }

        if let Some(label) = header_label(line) {
            let next = ScanState::AccumulateContent { label, lines: Vec::new() };
            if let ScanState::AccumulateContent { label, lines } = std::mem::replace(&mut state, next) {
                imported.finish_section(label, &lines);
            }
            continue;
        }

        // Text before the first header is ignored
        if let ScanState::AccumulateContent { lines, .. } = &mut state {
            lines.push(line);
        }
    }

    if !found_block || !block_has_text {
        log::info!("Prompt import: no [Lyrics] block");
        return Err(ImportError::NoLyricsBlock);
    }

    if let ScanState::AccumulateContent { label, lines } = state {
        imported.finish_section(label, &lines);
    }

    if imported.sections.is_empty() {
        log::info!("Prompt import: no recognizable sections ({} skipped)", imported.skipped.len());
        return Err(ImportError::NoRecognizableSections);
    }

    log::info!(
        "Prompt import: {} sections, {} skipped",
        imported.sections.len(),
        imported.skipped.len()
    );
    Ok(imported)
}
