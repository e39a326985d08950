use serde::{Deserialize, Serialize};

use super::debounce::Debouncer;
use super::{Direction, SessionError, RESET_CONFIRMATION, TEMPLATE_CONFIRMATION};
use crate::config::EditorConfig;
use crate::models::{
    find_template, PromptControls, Section, SectionKind, SongDocument, SongField, WritingControls,
};
use crate::parse::parse_lyrics_block;
use crate::renderers::{export_file_name, generate_prompt, to_json, to_plain_text, to_yaml};
use crate::storage::{load_draft, save_draft, DraftStore};
use crate::undo::HistoryStore;
use crate::utils::{section_stats, word_frequency, SectionStats, WordCount, PALETTE_SIZE};

/// Undo/redo affordance state for the toolbar
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_label: Option<String>,
    pub redo_label: Option<String>,
    pub entries: usize,
    pub pointer: usize,
}

/// Outcome of a successful prompt import
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: usize,
    /// Unrecognized header labels that were dropped
    pub skipped: Vec<String>,
}

impl ImportReport {
    /// User-facing notice
    pub fn message(&self) -> String {
        format!("Imported {} sections.", self.imported)
    }
}

/// What a `tick` did
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub persisted: bool,
    pub prompt_synced: bool,
}

/// One editing session over a single song draft
pub struct EditorSession {
    config: EditorConfig,
    store: Box<dyn DraftStore + Send>,
    history: HistoryStore<SongDocument>,
    prompt_text: String,
    /// Document the prompt was last generated from
    synced_song: SongDocument,
    /// Controls the prompt was last generated with
    synced_controls: PromptControls,
    prompt_controls: PromptControls,
    writing_controls: WritingControls,
    stop_words: Vec<String>,
    persist_debounce: Debouncer,
    controls_debounce: Debouncer,
}

impl EditorSession {
    /// Open a session, restoring the saved draft (or the default document)
    pub fn open(store: Box<dyn DraftStore + Send>, config: EditorConfig) -> Self {
        let history = HistoryStore::new_with(|| load_draft(store.as_ref(), &config.storage_key));
        let prompt_controls = config.prompt_controls.clamped();
        let synced_song = history.current().clone();
        let prompt_text = generate_prompt(&synced_song, &prompt_controls);

        log::info!(
            "Editor session opened: '{}' with {} sections",
            synced_song.title,
            synced_song.sections.len()
        );

        Self {
            persist_debounce: Debouncer::new(config.persist_debounce_ms),
            controls_debounce: Debouncer::new(config.controls_debounce_ms),
            config,
            store,
            history,
            prompt_text,
            synced_song,
            synced_controls: prompt_controls,
            prompt_controls,
            writing_controls: WritingControls::default(),
            stop_words: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current song document
    pub fn song(&self) -> &SongDocument {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStore<SongDocument> {
        &self.history
    }

    pub fn history_status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_label: self.history.undo_label().map(str::to_string),
            redo_label: self.history.redo_label().map(str::to_string),
            entries: self.history.len(),
            pointer: self.history.pointer(),
        }
    }

    fn record<F>(&mut self, label: String, now_ms: u64, updater: F) -> bool
    where
        F: FnOnce(&SongDocument) -> SongDocument,
    {
        let recorded = self.history.apply_with(updater, label);
        if recorded {
            log::debug!("Recorded '{}'", self.history.current_label());
            self.persist_debounce.schedule(now_ms);
        }
        recorded
    }

    fn section_kind(&self, id: &str) -> Result<SectionKind, SessionError> {
        self.song()
            .section(id)
            .map(|s| s.kind)
            .ok_or_else(|| SessionError::SectionNotFound(id.to_string()))
    }

    // ------------------------------------------------------------------
    // Editing actions
    // ------------------------------------------------------------------

    /// Edit a metadata field ("Edit Title", "Edit Mood", ...)
    pub fn edit_field(&mut self, field: SongField, value: &str, now_ms: u64) -> bool {
        let label = format!("Edit {}", field.label());
        self.record(label, now_ms, |song| {
            let mut next = song.clone();
            next.set_field(field, value.to_string());
            next
        })
    }

    pub fn edit_section_content(&mut self, id: &str, content: &str, now_ms: u64) -> Result<bool, SessionError> {
        let kind = self.section_kind(id)?;
        let label = format!("Edit {} Content", kind.label());
        Ok(self.record(label, now_ms, |song| {
            let mut next = song.clone();
            if let Some(section) = next.sections.iter_mut().find(|s| s.id == id) {
                section.content = content.to_string();
            }
            next
        }))
    }

    pub fn change_section_kind(&mut self, id: &str, kind: SectionKind, now_ms: u64) -> Result<bool, SessionError> {
        self.section_kind(id)?;
        let label = format!("Change Section Type to {}", kind.label());
        Ok(self.record(label, now_ms, |song| {
            let mut next = song.clone();
            if let Some(section) = next.sections.iter_mut().find(|s| s.id == id) {
                section.kind = kind;
            }
            next
        }))
    }

    /// Append an empty verse; returns its id
    pub fn add_section(&mut self, now_ms: u64) -> String {
        let section = Section::empty(SectionKind::Verse);
        let id = section.id.clone();
        self.record("Add Section".to_string(), now_ms, move |song| {
            let mut next = song.clone();
            next.sections.push(section);
            next
        });
        id
    }

    pub fn delete_section(&mut self, id: &str, now_ms: u64) -> Result<bool, SessionError> {
        let kind = self.section_kind(id)?;
        let label = format!("Delete {}", kind.label());
        Ok(self.record(label, now_ms, |song| {
            let mut next = song.clone();
            next.sections.retain(|s| s.id != id);
            next
        }))
    }

    /// Swap the section at `index` with its neighbour. Out of range is a no-op.
    pub fn move_section(&mut self, index: usize, direction: Direction, now_ms: u64) -> bool {
        let len = self.song().sections.len();
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1).filter(|t| *t < len),
        };
        let target = match target {
            Some(t) if index < len => t,
            _ => return false,
        };

        let kind = self.song().sections[index].kind;
        let label = format!("Move {} {}", kind.label(), direction.label());
        self.record(label, now_ms, |song| {
            let mut next = song.clone();
            next.sections.swap(index, target);
            next
        })
    }

    /// Replace all sections with the empty sections of a structure template
    ///
    /// Needs `confirmed` when any current section holds lyrics.
    pub fn apply_template(&mut self, name: &str, confirmed: bool, now_ms: u64) -> Result<bool, SessionError> {
        let template = find_template(name).ok_or_else(|| SessionError::UnknownTemplate(name.to_string()))?;
        if self.song().has_content() && !confirmed {
            return Err(SessionError::ConfirmationRequired(TEMPLATE_CONFIRMATION.to_string()));
        }

        let sections = template.sections();
        let label = format!("Apply Template: {}", template.name);
        Ok(self.record(label, now_ms, move |song| SongDocument {
            sections,
            ..song.clone()
        }))
    }

    /// Replace all sections with those parsed from prompt text
    pub fn import_sections(&mut self, text: &str, now_ms: u64) -> Result<ImportReport, SessionError> {
        let imported = parse_lyrics_block(text)?;
        let report = ImportReport {
            imported: imported.sections.len(),
            skipped: imported.skipped,
        };

        let sections = imported.sections;
        let label = format!("Import {} sections", report.imported);
        self.record(label, now_ms, move |song| SongDocument {
            sections,
            ..song.clone()
        });
        Ok(report)
    }

    /// Import from the session's own (possibly hand-edited) prompt text
    pub fn import_prompt(&mut self, now_ms: u64) -> Result<ImportReport, SessionError> {
        let text = self.prompt_text.clone();
        self.import_sections(&text, now_ms)
    }

    pub fn undo(&mut self, now_ms: u64) -> bool {
        let moved = self.history.undo();
        if moved {
            self.persist_debounce.schedule(now_ms);
        }
        moved
    }

    pub fn redo(&mut self, now_ms: u64) -> bool {
        let moved = self.history.redo();
        if moved {
            self.persist_debounce.schedule(now_ms);
        }
        moved
    }

    /// Discard the saved draft and all history, starting over from the default document
    pub fn reset_draft(&mut self, confirmed: bool) -> Result<(), SessionError> {
        if !confirmed {
            return Err(SessionError::ConfirmationRequired(RESET_CONFIRMATION.to_string()));
        }

        if let Err(e) = self.store.remove(&self.config.storage_key) {
            log::warn!("Failed to clear saved draft: {}", e);
        }
        self.persist_debounce.cancel();
        self.history.reset(SongDocument::new());
        self.sync_prompt();
        log::info!("Draft reset");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Prompt state
    // ------------------------------------------------------------------

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Store a hand-edited prompt. Not recorded in history.
    pub fn set_prompt_text(&mut self, text: &str) {
        self.prompt_text = text.to_string();
    }

    /// Re-generate the prompt from the current song and controls
    pub fn sync_prompt(&mut self) {
        self.prompt_text = generate_prompt(self.history.current(), &self.prompt_controls);
        self.synced_song = self.history.current().clone();
        self.synced_controls = self.prompt_controls;
        self.controls_debounce.cancel();
    }

    /// True when the song changed since the prompt was last generated
    pub fn is_out_of_sync(&self) -> bool {
        self.synced_song != *self.history.current()
    }

    pub fn prompt_controls(&self) -> PromptControls {
        self.prompt_controls
    }

    /// Update the sliders; the prompt follows once the debounce window has passed
    /// and the song is in sync (possibly later, after an undo back to the synced song)
    pub fn set_prompt_controls(&mut self, controls: PromptControls, now_ms: u64) {
        let controls = controls.clamped();
        if controls != self.prompt_controls {
            self.prompt_controls = controls;
            self.controls_debounce.schedule(now_ms);
        }
    }

    pub fn writing_controls(&self) -> WritingControls {
        self.writing_controls
    }

    pub fn set_writing_controls(&mut self, controls: WritingControls) {
        self.writing_controls = controls.clamped();
    }

    pub fn stop_words(&self) -> &[String] {
        &self.stop_words
    }

    /// Stop words, one per line
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
    }

    // ------------------------------------------------------------------
    // Time and persistence
    // ------------------------------------------------------------------

    /// Run whatever debounced work is due at `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let mut report = TickReport::default();

        if self.persist_debounce.poll(now_ms) {
            report.persisted = self.flush();
        }

        // Controls that settled while out of sync are applied once the song is back in sync
        self.controls_debounce.poll(now_ms);
        if !self.controls_debounce.is_pending()
            && self.synced_controls != self.prompt_controls
            && !self.is_out_of_sync()
        {
            self.sync_prompt();
            report.prompt_synced = true;
        }

        report
    }

    /// Write the current song to storage now. Failures are logged, not surfaced.
    pub fn flush(&mut self) -> bool {
        self.persist_debounce.cancel();
        let song = self.history.current();
        match save_draft(self.store.as_mut(), &self.config.storage_key, song) {
            Ok(()) => {
                log::debug!("Draft saved under '{}'", self.config.storage_key);
                true
            }
            Err(e) => {
                log::warn!("Failed to save draft: {}", e);
                false
            }
        }
    }

    pub fn has_pending_save(&self) -> bool {
        self.persist_debounce.is_pending()
    }

    // ------------------------------------------------------------------
    // Exports and analysis
    // ------------------------------------------------------------------

    pub fn export_text(&self) -> String {
        to_plain_text(self.song())
    }

    pub fn export_json(&self) -> Result<String, SessionError> {
        to_json(self.song()).map_err(SessionError::Export)
    }

    pub fn export_yaml(&self) -> Result<String, SessionError> {
        to_yaml(self.song()).map_err(SessionError::Export)
    }

    pub fn export_file_name(&self, extension: &str) -> String {
        export_file_name(&self.song().title, extension)
    }

    pub fn section_stats(&self, id: &str) -> Option<SectionStats> {
        self.song().section(id).map(|s| section_stats(&s.content))
    }

    /// Top words across the song ("style palette")
    pub fn word_frequency(&self) -> Vec<WordCount> {
        word_frequency(self.song(), PALETTE_SIZE)
    }
}
