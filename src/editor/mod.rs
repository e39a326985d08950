//! Editor session
//!
//! The host-side composition that owns the canonical song document (through
//! the undo history), the prompt text and its sync state, the slider
//! controls, and the debounced persistence of the draft.

pub mod debounce;
pub mod session;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parse::ImportError;

pub use debounce::Debouncer;
pub use session::{EditorSession, HistoryStatus, ImportReport, TickReport};

/// Prompt shown before a template replaces sections that hold lyrics
pub const TEMPLATE_CONFIRMATION: &str =
    "Applying a template will replace all existing sections. Continue?";

/// Prompt shown before the whole draft is reset
pub const RESET_CONFIRMATION: &str =
    "Are you sure you want to reset the entire draft? This will clear your auto-saved work.";

/// Errors from editor actions. None of them changes any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Import(#[from] ImportError),

    /// A destructive action was requested without confirmation; carries the question to ask
    #[error("{0}")]
    ConfirmationRequired(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Direction for moving a section
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}
