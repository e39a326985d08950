//! Lyrics Lab WASM API
//!
//! This module provides the JavaScript-facing API for the lyrics editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `core`: Session lifecycle, editing actions, prompt, exports

pub mod helpers;
pub mod core;

// Re-export all public functions to keep a flat API
pub use core::*;
