//! Application module - the gpui view wrapping the board controller.
//!
//! This module is organized into several submodules:
//! - `state` - The KwlBoard struct definition
//! - `lifecycle` - Initialization and input subscriptions
//! - `note_handlers` - Form, note, mode and clear handlers
//! - `export_handlers` - Download and download-and-clear

mod state;
mod lifecycle;
mod note_handlers;
mod export_handlers;

pub use state::KwlBoard;
