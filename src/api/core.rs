//! WASM API for the editor session
//!
//! This module provides the JavaScript-facing functions. The session is owned
//! here (WASM-owned source of truth); JavaScript only renders snapshots and
//! forwards user actions.

use lazy_static::lazy_static;
use serde::Serialize;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, session_error_to_js};
use crate::config::EditorConfig;
use crate::editor::{Direction, EditorSession, HistoryStatus};
use crate::models::{template_names, PromptControls, SectionKind, SongDocument, SongField, WritingControls};
use crate::storage::DraftStore;
use crate::{wasm_error, wasm_info, wasm_log};

// WASM-owned editor session (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<EditorSession>> = Mutex::new(None);
}

/// Everything the UI needs to re-render after an action
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub song: SongDocument,
    pub history: HistoryStatus,
    pub prompt_text: String,
    pub out_of_sync: bool,
    pub prompt_controls: PromptControls,
    pub writing_controls: WritingControls,
}

impl EditorSnapshot {
    pub fn of(session: &EditorSession) -> Self {
        Self {
            song: session.song().clone(),
            history: session.history_status(),
            prompt_text: session.prompt_text().to_string(),
            out_of_sync: session.is_out_of_sync(),
            prompt_controls: session.prompt_controls(),
            writing_controls: session.writing_controls(),
        }
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Box<dyn DraftStore + Send> {
    Box::new(crate::storage::LocalStorageStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Box<dyn DraftStore + Send> {
    Box::new(crate::storage::MemoryStore::new())
}

/// Run `f` against the open session
fn with_session<R, F>(f: F) -> Result<R, JsValue>
where
    F: FnOnce(&mut EditorSession) -> Result<R, JsValue>,
{
    let mut guard = SESSION.lock().map_err(|e| {
        wasm_error!("Failed to lock session: {}", e);
        JsValue::from_str("Session lock poisoned")
    })?;
    let session = guard.as_mut().ok_or_else(|| {
        wasm_error!("No editor session open");
        JsValue::from_str("No editor session open")
    })?;
    f(session)
}

/// Run `f` and return the resulting snapshot
fn act<F>(f: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(&mut EditorSession) -> Result<(), JsValue>,
{
    with_session(|session| {
        f(session)?;
        serialize(&EditorSnapshot::of(session), "Snapshot serialization error")
    })
}

// ============================================================================
// Session lifecycle
// ============================================================================

/// Open (or re-open) the editor session, restoring the saved draft
///
/// # Parameters
/// - `config_js`: optional `EditorConfig` object (camelCase, every field optional)
///
/// # Returns
/// The initial editor snapshot
#[wasm_bindgen(js_name = openEditor)]
pub fn open_editor(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: EditorConfig = deserialize_or_default(config_js, "Config deserialization error")?;
    wasm_info!("openEditor: storage key '{}'", config.storage_key);

    let session = EditorSession::open(default_store(), config);
    let snapshot = serialize(&EditorSnapshot::of(&session), "Snapshot serialization error")?;

    let mut guard = SESSION.lock().map_err(|e| {
        wasm_error!("Failed to lock session: {}", e);
        JsValue::from_str("Session lock poisoned")
    })?;
    *guard = Some(session);
    Ok(snapshot)
}

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    act(|_| Ok(()))
}

/// Run due debounced work (draft persistence, prompt auto-sync)
#[wasm_bindgen(js_name = tick)]
pub fn tick() -> Result<JsValue, JsValue> {
    with_session(|session| {
        let report = session.tick(now_ms());
        if report.persisted {
            wasm_log!("Draft persisted");
        }
        serialize(&report, "Tick report serialization error")
    })
}

/// Persist the draft immediately (e.g. on `beforeunload`)
#[wasm_bindgen(js_name = flushDraft)]
pub fn flush_draft() -> Result<bool, JsValue> {
    with_session(|session| Ok(session.flush()))
}

// ============================================================================
// Editing actions
// ============================================================================

#[wasm_bindgen(js_name = editField)]
pub fn edit_field(name: &str, value: &str) -> Result<JsValue, JsValue> {
    let field = SongField::from_name(name).ok_or_else(|| {
        wasm_error!("Unknown field: {}", name);
        JsValue::from_str(&format!("Unknown field: {}", name))
    })?;
    act(|session| {
        session.edit_field(field, value, now_ms());
        Ok(())
    })
}

#[wasm_bindgen(js_name = editSectionContent)]
pub fn edit_section_content(id: &str, content: &str) -> Result<JsValue, JsValue> {
    act(|session| {
        session
            .edit_section_content(id, content, now_ms())
            .map(|_| ())
            .map_err(session_error_to_js)
    })
}

/// Change a section's kind by display label (e.g. "Pre-Chorus")
#[wasm_bindgen(js_name = changeSectionType)]
pub fn change_section_type(id: &str, label: &str) -> Result<JsValue, JsValue> {
    let kind = SectionKind::from_label(label).ok_or_else(|| {
        wasm_error!("Unknown section type: {}", label);
        JsValue::from_str(&format!("Unknown section type: {}", label))
    })?;
    act(|session| {
        session
            .change_section_kind(id, kind, now_ms())
            .map(|_| ())
            .map_err(session_error_to_js)
    })
}

#[wasm_bindgen(js_name = addSection)]
pub fn add_section() -> Result<JsValue, JsValue> {
    act(|session| {
        let id = session.add_section(now_ms());
        wasm_log!("addSection: {}", id);
        Ok(())
    })
}

#[wasm_bindgen(js_name = deleteSection)]
pub fn delete_section(id: &str) -> Result<JsValue, JsValue> {
    act(|session| {
        session
            .delete_section(id, now_ms())
            .map(|_| ())
            .map_err(session_error_to_js)
    })
}

/// Move a section one slot; `direction` is "up" or "down"
#[wasm_bindgen(js_name = moveSection)]
pub fn move_section(index: usize, direction: &str) -> Result<JsValue, JsValue> {
    let direction = match direction {
        "up" => Direction::Up,
        "down" => Direction::Down,
        other => {
            wasm_error!("Unknown direction: {}", other);
            return Err(JsValue::from_str(&format!("Unknown direction: {}", other)));
        }
    };
    act(|session| {
        session.move_section(index, direction, now_ms());
        Ok(())
    })
}

/// Apply a structure template
///
/// Fails with `confirmationRequired` when sections hold lyrics and
/// `confirmed` is false; call again with `confirmed = true` after asking.
#[wasm_bindgen(js_name = applyTemplate)]
pub fn apply_template(name: &str, confirmed: bool) -> Result<JsValue, JsValue> {
    act(|session| {
        session
            .apply_template(name, confirmed, now_ms())
            .map(|_| ())
            .map_err(session_error_to_js)
    })
}

/// Import sections from prompt text
///
/// # Returns
/// `{ imported, skipped, message }` on success; a `{ code, message }` error
/// (`noLyricsBlock` / `noRecognizableSections`) otherwise.
#[wasm_bindgen(js_name = importSections)]
pub fn import_sections(text: &str) -> Result<JsValue, JsValue> {
    #[derive(Serialize)]
    struct ImportResult {
        imported: usize,
        skipped: Vec<String>,
        message: String,
    }

    with_session(|session| {
        let report = session
            .import_sections(text, now_ms())
            .map_err(session_error_to_js)?;
        wasm_info!("importSections: {} imported, {} skipped", report.imported, report.skipped.len());
        let message = report.message();
        serialize(
            &ImportResult {
                imported: report.imported,
                skipped: report.skipped,
                message,
            },
            "Import result serialization error",
        )
    })
}

#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<JsValue, JsValue> {
    act(|session| {
        session.undo(now_ms());
        Ok(())
    })
}

#[wasm_bindgen(js_name = redo)]
pub fn redo() -> Result<JsValue, JsValue> {
    act(|session| {
        session.redo(now_ms());
        Ok(())
    })
}

/// Reset the whole draft. Requires `confirmed = true`; not undoable.
#[wasm_bindgen(js_name = resetDraft)]
pub fn reset_draft(confirmed: bool) -> Result<JsValue, JsValue> {
    act(|session| session.reset_draft(confirmed).map_err(session_error_to_js))
}

// ============================================================================
// Prompt
// ============================================================================

#[wasm_bindgen(js_name = syncPrompt)]
pub fn sync_prompt() -> Result<JsValue, JsValue> {
    act(|session| {
        session.sync_prompt();
        Ok(())
    })
}

#[wasm_bindgen(js_name = setPromptText)]
pub fn set_prompt_text(text: &str) -> Result<JsValue, JsValue> {
    act(|session| {
        session.set_prompt_text(text);
        Ok(())
    })
}

#[wasm_bindgen(js_name = getPromptText)]
pub fn get_prompt_text() -> Result<String, JsValue> {
    with_session(|session| Ok(session.prompt_text().to_string()))
}

#[wasm_bindgen(js_name = setPromptControls)]
pub fn set_prompt_controls(controls_js: JsValue) -> Result<JsValue, JsValue> {
    let controls: PromptControls = deserialize(controls_js, "Prompt controls deserialization error")?;
    act(|session| {
        session.set_prompt_controls(controls, now_ms());
        Ok(())
    })
}

#[wasm_bindgen(js_name = setWritingControls)]
pub fn set_writing_controls(controls_js: JsValue) -> Result<JsValue, JsValue> {
    let controls: WritingControls = deserialize(controls_js, "Writing controls deserialization error")?;
    act(|session| {
        session.set_writing_controls(controls);
        Ok(())
    })
}

#[wasm_bindgen(js_name = setStopWords)]
pub fn set_stop_words(text: &str) -> Result<(), JsValue> {
    with_session(|session| {
        session.set_stop_words(text);
        Ok(())
    })
}

// ============================================================================
// Exports and analysis
// ============================================================================

#[wasm_bindgen(js_name = exportText)]
pub fn export_text() -> Result<String, JsValue> {
    with_session(|session| Ok(session.export_text()))
}

#[wasm_bindgen(js_name = exportJson)]
pub fn export_json() -> Result<String, JsValue> {
    with_session(|session| session.export_json().map_err(session_error_to_js))
}

#[wasm_bindgen(js_name = exportYaml)]
pub fn export_yaml() -> Result<String, JsValue> {
    with_session(|session| session.export_yaml().map_err(session_error_to_js))
}

/// Download file name for the current title, e.g. `My_Song.txt`
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(extension: &str) -> Result<String, JsValue> {
    with_session(|session| Ok(session.export_file_name(extension)))
}

#[wasm_bindgen(js_name = sectionStats)]
pub fn section_stats(id: &str) -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.section_stats(id), "Stats serialization error"))
}

#[wasm_bindgen(js_name = wordFrequency)]
pub fn word_frequency() -> Result<JsValue, JsValue> {
    with_session(|session| serialize(&session.word_frequency(), "Word frequency serialization error"))
}

// ============================================================================
// Static lookups
// ============================================================================

/// Display labels of every section kind
#[wasm_bindgen(js_name = getSectionTypes)]
pub fn get_section_types() -> Result<JsValue, JsValue> {
    let labels: Vec<&str> = SectionKind::ALL.iter().map(|k| k.label()).collect();
    serialize(&labels, "Section types serialization error")
}

#[wasm_bindgen(js_name = getTemplateNames)]
pub fn get_template_names() -> Result<JsValue, JsValue> {
    serialize(&template_names(), "Template names serialization error")
}
