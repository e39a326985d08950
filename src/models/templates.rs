//! Song structure templates
//!
//! Static presets that replace the section list with empty sections in a
//! common song form.

use super::song::{Section, SectionKind};

/// A named sequence of section kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureTemplate {
    pub name: &'static str,
    pub kinds: &'static [SectionKind],
}

impl StructureTemplate {
    /// Fresh, empty sections for this template
    pub fn sections(&self) -> Vec<Section> {
        self.kinds.iter().map(|kind| Section::empty(*kind)).collect()
    }
}

use SectionKind::*;

pub const STRUCTURE_TEMPLATES: &[StructureTemplate] = &[
    StructureTemplate {
        name: "Verse-Chorus-Verse-Chorus",
        kinds: &[Verse, Chorus, Verse, Chorus],
    },
    StructureTemplate {
        name: "Verse-Chorus-Verse-Chorus-Bridge-Chorus",
        kinds: &[Verse, Chorus, Verse, Chorus, Bridge, Chorus],
    },
    StructureTemplate {
        name: "Intro-Verse-Chorus-Outro",
        kinds: &[Intro, Verse, Chorus, Outro],
    },
    StructureTemplate {
        name: "Verse-PreChorus-Chorus (x2)",
        kinds: &[Verse, PreChorus, Chorus, Verse, PreChorus, Chorus],
    },
];

/// Look up a template by name
pub fn find_template(name: &str) -> Option<&'static StructureTemplate> {
    STRUCTURE_TEMPLATES.iter().find(|t| t.name == name)
}

/// Template names in display order
pub fn template_names() -> Vec<&'static str> {
    STRUCTURE_TEMPLATES.iter().map(|t| t.name).collect()
}
