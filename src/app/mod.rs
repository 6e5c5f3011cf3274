//! Editor module - the LayoutEditor state and its actions.
//!
//! This module is organized into several submodules:
//! - `state` - The LayoutEditor struct definition and sub-structs
//! - `lifecycle` - Construction and settings hot-reload
//! - `layout_actions` - Add, delete, restyle and resize operations
//!
//! Pointer handling lives in [`crate::input`] as further `impl LayoutEditor`
//! blocks.

mod layout_actions;
mod lifecycle;
mod state;

pub use state::{CanvasState, LayoutEditor, SettingsState};
