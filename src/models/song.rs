//! Song document model
//!
//! `SongDocument` is the complete editable state: metadata plus the ordered
//! list of lyric sections. It is the value versioned by the undo history and
//! persisted as the draft, so it must stay fully value-comparable.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed set of section kinds a lyric section can carry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    #[serde(rename = "Verse")]
    Verse,
    #[serde(rename = "Chorus")]
    Chorus,
    #[serde(rename = "Bridge")]
    Bridge,
    #[serde(rename = "Intro")]
    Intro,
    #[serde(rename = "Outro")]
    Outro,
    #[serde(rename = "Pre-Chorus")]
    PreChorus,
    #[serde(rename = "Hook")]
    Hook,
    #[serde(rename = "Solo")]
    Solo,
}

impl SectionKind {
    /// Every kind, in the order the editor offers them
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Verse,
        SectionKind::Chorus,
        SectionKind::Bridge,
        SectionKind::Intro,
        SectionKind::Outro,
        SectionKind::PreChorus,
        SectionKind::Hook,
        SectionKind::Solo,
    ];

    /// Canonical display label, as it appears inside `[...]` headers
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Verse => "Verse",
            SectionKind::Chorus => "Chorus",
            SectionKind::Bridge => "Bridge",
            SectionKind::Intro => "Intro",
            SectionKind::Outro => "Outro",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Hook => "Hook",
            SectionKind::Solo => "Solo",
        }
    }

    /// Resolve a display label (exact match)
    pub fn from_label(label: &str) -> Option<SectionKind> {
        Self::ALL.iter().copied().find(|kind| kind.label() == label)
    }

    /// Lowercase slug used as the id prefix
    pub fn slug(&self) -> &'static str {
        match self {
            SectionKind::Verse => "verse",
            SectionKind::Chorus => "chorus",
            SectionKind::Bridge => "bridge",
            SectionKind::Intro => "intro",
            SectionKind::Outro => "outro",
            SectionKind::PreChorus => "pre-chorus",
            SectionKind::Hook => "hook",
            SectionKind::Solo => "solo",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named block of lyric content
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Stable unique id, assigned once at creation
    pub id: String,

    /// Section kind (serialized as `type` for compatibility with saved drafts)
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Raw lyric text
    pub content: String,
}

impl Section {
    /// Create a section with a freshly generated id
    pub fn new(kind: SectionKind, content: impl Into<String>) -> Self {
        Self {
            id: generate_section_id(kind),
            kind,
            content: content.into(),
        }
    }

    /// Create an empty section of the given kind
    pub fn empty(kind: SectionKind) -> Self {
        Self::new(kind, String::new())
    }

    /// True when the section holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Generate a new section id (`<kind-slug>-<uuid>`)
pub fn generate_section_id(kind: SectionKind) -> String {
    format!("{}-{}", kind.slug(), Uuid::new_v4())
}

/// Editable metadata fields of a song
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SongField {
    Title,
    Artist,
    Mood,
    Format,
}

impl SongField {
    /// Capitalized field name used in history labels
    pub fn label(&self) -> &'static str {
        match self {
            SongField::Title => "Title",
            SongField::Artist => "Artist",
            SongField::Mood => "Mood",
            SongField::Format => "Format",
        }
    }

    /// Parse a field by its lowercase name (`"title"`, `"artist"`, ...)
    pub fn from_name(name: &str) -> Option<SongField> {
        match name {
            "title" => Some(SongField::Title),
            "artist" => Some(SongField::Artist),
            "mood" => Some(SongField::Mood),
            "format" => Some(SongField::Format),
            _ => None,
        }
    }
}

/// The complete editable song state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SongDocument {
    pub title: String,
    pub artist: String,
    pub mood: String,
    pub format: String,
    /// Ordered sections (reading/playback order)
    pub sections: Vec<Section>,
}

impl SongDocument {
    /// Built-in starting draft
    pub fn new() -> Self {
        Self {
            title: "New Song".to_string(),
            artist: "Unknown Artist".to_string(),
            mood: "Melancholic".to_string(),
            format: "Single".to_string(),
            sections: vec![
                Section::new(SectionKind::Verse, "First lines here..."),
                Section::new(SectionKind::Chorus, "A catchy chorus..."),
            ],
        }
    }

    pub fn field(&self, field: SongField) -> &str {
        match field {
            SongField::Title => &self.title,
            SongField::Artist => &self.artist,
            SongField::Mood => &self.mood,
            SongField::Format => &self.format,
        }
    }

    pub fn set_field(&mut self, field: SongField, value: String) {
        match field {
            SongField::Title => self.title = value,
            SongField::Artist => self.artist = value,
            SongField::Mood => self.mood = value,
            SongField::Format => self.format = value,
        }
    }

    /// Find a section by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Index of a section by id
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// True if any section has non-whitespace content
    pub fn has_content(&self) -> bool {
        self.sections.iter().any(|s| !s.is_blank())
    }
}

impl Default for SongDocument {
    fn default() -> Self {
        Self::new()
    }
}
