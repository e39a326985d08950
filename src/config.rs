//! Editor configuration
//!
//! Every field has a default, so the host may pass `{}` (or nothing).

use serde::{Deserialize, Serialize};

use crate::models::PromptControls;
use crate::storage::DEFAULT_STORAGE_KEY;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Key the draft is persisted under
    pub storage_key: String,

    /// Quiet period before a changed document is written to storage
    pub persist_debounce_ms: u64,

    /// Quiet period before changed prompt controls re-generate the prompt
    pub controls_debounce_ms: u64,

    /// Initial originality sliders
    pub prompt_controls: PromptControls,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_debounce_ms: 500,
            controls_debounce_ms: 200,
            prompt_controls: PromptControls::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse editor config JSON: {}", e))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse editor config YAML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.storage_key, "lyricsLabDraft");
        assert_eq!(config.persist_debounce_ms, 500);
        assert_eq!(config.controls_debounce_ms, 200);
    }

    #[test]
    fn test_partial_yaml() {
        let config = EditorConfig::from_yaml(
            "storageKey: myDraft\npromptControls:\n  styleOriginality: 40\n",
        )
        .unwrap();
        assert_eq!(config.storage_key, "myDraft");
        assert_eq!(config.prompt_controls.style_originality, 40);
        assert_eq!(config.prompt_controls.instrumentation_originality, 85);
        assert_eq!(config.persist_debounce_ms, 500);
    }

    #[test]
    fn test_invalid_json() {
        assert!(EditorConfig::from_json("[1, 2]").is_err());
    }
}
