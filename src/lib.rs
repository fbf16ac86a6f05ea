//! KWL Board - a Know-Want-Learned board for pre/post assessment.
//!
//! The board model (`types`, `partition`, `notes`, `board`), persistence
//! (`storage`) and export (`export`) are plain Rust. The gpui window lives in
//! `app` and `render`.

pub mod app;
pub mod board;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod notes;
pub mod notifications;
pub mod partition;
pub mod render;
pub mod settings;
pub mod storage;
pub mod types;
