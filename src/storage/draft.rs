//! Saved draft envelope and load policy
//!
//! Drafts are stored as `{"schemaVersion": N, "song": {...}}`. On load:
//! - nothing stored: default document
//! - current schema version: used as-is
//! - bare song document without envelope (written by earlier builds): upgraded
//! - any other version, or malformed data: discarded, default document
//!
//! Load problems are logged and never surfaced to the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DraftStore, StorageError};
use crate::models::SongDocument;

/// Version written by this build
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDraft {
    pub schema_version: u32,
    pub song: SongDocument,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftEnvelope<'a> {
    schema_version: u32,
    song: &'a SongDocument,
}

/// Serialize a song into the current envelope
pub fn encode_draft(song: &SongDocument) -> Result<String, StorageError> {
    serde_json::to_string(&DraftEnvelope {
        schema_version: SCHEMA_VERSION,
        song,
    })
    .map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Decode a stored draft, upgrading unversioned drafts
pub fn decode_draft(raw: &str) -> Result<SongDocument, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| format!("draft is not valid JSON: {}", e))?;

    match value.get("schemaVersion") {
        Some(version) if version.as_u64() == Some(u64::from(SCHEMA_VERSION)) => {
            serde_json::from_value::<PersistedDraft>(value)
                .map(|draft| draft.song)
                .map_err(|e| format!("malformed v{} draft: {}", SCHEMA_VERSION, e))
        }
        Some(version) => Err(format!("unsupported draft schema version {}", version)),
        None => {
            let song = serde_json::from_value::<SongDocument>(value)
                .map_err(|e| format!("malformed unversioned draft: {}", e))?;
            log::info!("Upgrading unversioned draft to schema v{}", SCHEMA_VERSION);
            Ok(song)
        }
    }
}

/// Load the saved draft, falling back to the built-in default document
pub fn load_draft(store: &dyn DraftStore, key: &str) -> SongDocument {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No saved draft under '{}', starting from default", key);
            return SongDocument::new();
        }
        Err(e) => {
            log::warn!("Failed to load saved draft: {}", e);
            return SongDocument::new();
        }
    };

    match decode_draft(&raw) {
        Ok(song) => {
            log::info!("Loaded saved draft '{}' ({} sections)", song.title, song.sections.len());
            song
        }
        Err(message) => {
            log::warn!("Discarding saved draft: {}", message);
            SongDocument::new()
        }
    }
}

/// Write the song under `key` in the current envelope
pub fn save_draft(store: &mut dyn DraftStore, key: &str, song: &SongDocument) -> Result<(), StorageError> {
    let json = encode_draft(song)?;
    store.write(key, &json)
}
