//! Plain-text lyric sheet export

use super::prompt::render_sections;
use crate::models::SongDocument;

/// `[<Label>]\n<content>` blocks joined by blank lines, in section order
pub fn to_plain_text(song: &SongDocument) -> String {
    render_sections(&song.sections)
}

/// File name for an export: whitespace in the title becomes `_`
pub fn export_file_name(title: &str, extension: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}.{}", stem, extension.trim_start_matches('.'))
}
