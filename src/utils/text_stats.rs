//! Word and line statistics for lyric text

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::SongDocument;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// How many words the style palette lists
pub const PALETTE_SIZE: usize = 10;

/// Counts shown under each section editor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectionStats {
    pub words: usize,
    pub lines: usize,
}

/// Word and non-blank line counts of a block of text
pub fn section_stats(content: &str) -> SectionStats {
    SectionStats {
        words: WORD_RE.find_iter(content).count(),
        lines: content.lines().filter(|l| !l.trim().is_empty()).count(),
    }
}

/// One row of the style palette
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent lowercased words across every section
///
/// Sorted by count, descending; ties keep first-appearance order.
pub fn word_frequency(song: &SongDocument, limit: usize) -> Vec<WordCount> {
    let all_text = song
        .sections
        .iter()
        .map(|s| s.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for m in WORD_RE.find_iter(&all_text) {
        match index.get(m.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(m.as_str().to_string(), counts.len());
                counts.push(WordCount {
                    word: m.as_str().to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
