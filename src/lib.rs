//! Lyrics Lab WASM Module
//!
//! Core of the Lyrics Lab song workshop: structured song editing with
//! undo/redo history, generation of the bracketed music-generation prompt,
//! re-import of edited prompts, and draft persistence.

pub mod api;
pub mod config;
pub mod editor;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod storage;
pub mod undo;
pub mod utils;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{EditorSession, SessionError};
pub use models::*;
pub use parse::{parse_lyrics_block, ImportError, ImportedSections};
pub use renderers::generate_prompt;
pub use undo::HistoryStore;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("failed to initialize logger: {}", e).into());
        }
    }

    log::info!("Lyrics Lab WASM module initialized");
}
