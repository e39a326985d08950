//! Structured (JSON / YAML) export of the song document

use crate::models::SongDocument;

/// Pretty-printed JSON (2-space indent)
pub fn to_json(song: &SongDocument) -> Result<String, String> {
    serde_json::to_string_pretty(song).map_err(|e| format!("Failed to serialize song as JSON: {}", e))
}

/// YAML document
pub fn to_yaml(song: &SongDocument) -> Result<String, String> {
    serde_yaml::to_string(song).map_err(|e| format!("Failed to serialize song as YAML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, SectionKind};

    fn sample() -> SongDocument {
        SongDocument {
            title: "Night Drive".to_string(),
            artist: "X".to_string(),
            mood: "Dreamy".to_string(),
            format: "EP".to_string(),
            sections: vec![Section {
                id: "verse-1".to_string(),
                kind: SectionKind::Verse,
                content: "headlights".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_export_is_pretty_and_parses_back() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains("\n  \"title\": \"Night Drive\""));
        assert!(json.contains("\"type\": \"Verse\""));
        let back: SongDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_yaml_export() {
        let yaml = to_yaml(&sample()).unwrap();
        assert!(yaml.contains("title: Night Drive"));
        assert!(yaml.contains("type: Verse"));
    }
}
