//! Core types for the KWL board.
//!
//! Notes carry a color that fixes both their category and the assessment
//! partition they live in. Nothing here touches gpui so the model can be
//! exercised without a window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sticky-note color. Decides category and partition for the note's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Yellow,
    Pink,
    Orange,
    Blue,
}

impl NoteColor {
    pub fn all() -> &'static [NoteColor] {
        &[
            NoteColor::Yellow,
            NoteColor::Pink,
            NoteColor::Orange,
            NoteColor::Blue,
        ]
    }

    /// Category a note of this color is filed under.
    pub fn category(self) -> Category {
        match self {
            NoteColor::Yellow => Category::Know,
            NoteColor::Pink => Category::Want,
            NoteColor::Orange | NoteColor::Blue => Category::Learned,
        }
    }

    /// Assessment mode whose partition holds notes of this color.
    pub fn mode(self) -> AssessmentMode {
        match self {
            NoteColor::Yellow | NoteColor::Pink => AssessmentMode::Pre,
            NoteColor::Orange | NoteColor::Blue => AssessmentMode::Post,
        }
    }

    /// Label shown in the color selector
    pub fn label(self) -> &'static str {
        match self {
            NoteColor::Yellow => "Yellow (Know)",
            NoteColor::Pink => "Pink (Want to know)",
            NoteColor::Orange => "Orange (Learned)",
            NoteColor::Blue => "Blue (Learned)",
        }
    }

    /// Fill color as 0xRRGGBB, shared by the live view and the exporter
    pub fn hex(self) -> u32 {
        match self {
            NoteColor::Yellow => 0xFFF176,
            NoteColor::Pink => 0xF8BBD0,
            NoteColor::Orange => 0xFFCC80,
            NoteColor::Blue => 0x90CAF9,
        }
    }

    pub fn rgba(self) -> [u8; 4] {
        let hex = self.hex();
        [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xFF]
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Pink => "pink",
            NoteColor::Orange => "orange",
            NoteColor::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// KWL column a note belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Know,
    Want,
    Learned,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Know => "Know",
            Category::Want => "Want to know",
            Category::Learned => "Learned",
        }
    }
}

/// Which half of the exercise is on screen. A pure view filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMode {
    #[default]
    Pre,
    Post,
}

impl AssessmentMode {
    pub fn all() -> &'static [AssessmentMode] {
        &[AssessmentMode::Pre, AssessmentMode::Post]
    }

    pub fn label(self) -> &'static str {
        match self {
            AssessmentMode::Pre => "Pre-Assessment",
            AssessmentMode::Post => "Post-Assessment",
        }
    }
}

/// A single sticky note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque unique identifier, never reused
    pub id: String,
    /// Trimmed, non-empty content
    pub text: String,
    pub color: NoteColor,
    /// Stored alongside the color; derived once at creation
    pub category: Category,
}

impl Note {
    /// Create a note with a fresh id. `text` is expected to be trimmed already.
    pub fn new(text: impl Into<String>, color: NoteColor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            color,
            category: color.category(),
        }
    }

    pub fn mode(&self) -> AssessmentMode {
        self.color.mode()
    }
}
