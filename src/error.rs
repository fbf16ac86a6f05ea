//! Error types for board operations, persistence and export.
//!
//! None of these are fatal: callers turn them into toasts, modals or log
//! lines and keep running.

use crate::types::AssessmentMode;
use thiserror::Error;

/// Errors from note operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// Text was empty after trimming
    #[error("Please enter some text for your note")]
    EmptyText,

    /// The target partition already holds the maximum number of notes
    #[error("The {} board is full ({capacity} notes)", .mode.label())]
    BoardFull {
        mode: AssessmentMode,
        capacity: usize,
    },

    /// No note with this id exists
    #[error("Note not found: {0}")]
    NotFound(String),
}

/// Errors from the durable storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Renaming the temp file over the record failed
    #[error("Failed to persist record: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Errors from rasterizing or writing an exported board
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A font face could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// The board could not be rendered
    #[error("Render failed: {0}")]
    Render(String),

    /// No directory to write the export into
    #[error("No export directory available")]
    NoDestination,
}

/// Result type alias for note operations
pub type NoteResult<T> = Result<T, NoteError>;

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
