//! Numeric controls (0-100 sliders)

use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound of every percentage control
pub const MAX_LEVEL: u8 = 100;

fn clamp_level(value: u8) -> u8 {
    value.min(MAX_LEVEL)
}

/// Accept any number for a level (sliders hand over plain JS numbers):
/// rounded, then clamped to 0..=100
fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_nan() {
        return Err(serde::de::Error::custom("level is not a number"));
    }
    Ok(value.round().clamp(0.0, f64::from(MAX_LEVEL)) as u8)
}

/// Originality levels written at the end of the generated prompt
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptControls {
    #[serde(deserialize_with = "deserialize_level")]
    pub style_originality: u8,
    #[serde(deserialize_with = "deserialize_level")]
    pub instrumentation_originality: u8,
}

impl PromptControls {
    pub fn new(style_originality: u8, instrumentation_originality: u8) -> Self {
        Self {
            style_originality: clamp_level(style_originality),
            instrumentation_originality: clamp_level(instrumentation_originality),
        }
    }

    /// Copy with every level clamped to 0..=100
    pub fn clamped(self) -> Self {
        Self::new(self.style_originality, self.instrumentation_originality)
    }
}

impl Default for PromptControls {
    fn default() -> Self {
        Self::new(75, 85)
    }
}

/// Writing-assistant levels. Stored for the host; nothing consumes them yet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WritingControls {
    #[serde(deserialize_with = "deserialize_level")]
    pub metaphor_level: u8,
    #[serde(deserialize_with = "deserialize_level")]
    pub rhyme_complexity: u8,
    #[serde(deserialize_with = "deserialize_level")]
    pub temperature: u8,
}

impl WritingControls {
    pub fn clamped(self) -> Self {
        Self {
            metaphor_level: clamp_level(self.metaphor_level),
            rhyme_complexity: clamp_level(self.rhyme_complexity),
            temperature: clamp_level(self.temperature),
        }
    }
}

impl Default for WritingControls {
    fn default() -> Self {
        Self {
            metaphor_level: 50,
            rhyme_complexity: 70,
            temperature: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_controls_clamp() {
        let controls = PromptControls::new(150, 20);
        assert_eq!(controls.style_originality, 100);
        assert_eq!(controls.instrumentation_originality, 20);
    }

    #[test]
    fn test_prompt_controls_camel_case_with_defaults() {
        let controls: PromptControls =
            serde_json::from_str(r#"{"styleOriginality": 10}"#).unwrap();
        assert_eq!(controls.style_originality, 10);
        assert_eq!(controls.instrumentation_originality, 85);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped_on_input() {
        let controls: PromptControls = serde_json::from_str(
            r#"{"styleOriginality": 300, "instrumentationOriginality": -5}"#,
        )
        .unwrap();
        assert_eq!(controls, PromptControls::new(100, 0));

        let controls: WritingControls =
            serde_json::from_str(r#"{"metaphorLevel": 42.6, "temperature": 1000}"#).unwrap();
        assert_eq!(controls.metaphor_level, 43);
        assert_eq!(controls.rhyme_complexity, 70);
        assert_eq!(controls.temperature, 100);

        assert!(serde_json::from_str::<PromptControls>(r#"{"styleOriginality": "high"}"#).is_err());
    }

    #[test]
    fn test_writing_controls_defaults() {
        let controls = WritingControls::default();
        assert_eq!(controls.metaphor_level, 50);
        assert_eq!(controls.rhyme_complexity, 70);
        assert_eq!(controls.temperature, 80);
    }
}
