//! View partitioning by assessment mode.
//!
//! Every mutating note operation decomposes the collection into the notes of
//! one partition and everything else, works on the partition alone and
//! reassembles the two. Notes outside the partition keep their relative order.

use crate::constants::NOTE_CAPACITY;
use crate::types::{AssessmentMode, Note, NoteColor};

/// The two colors offered for new notes under `mode`. The first is the default.
pub fn available_colors(mode: AssessmentMode) -> [NoteColor; 2] {
    match mode {
        AssessmentMode::Pre => [NoteColor::Yellow, NoteColor::Pink],
        AssessmentMode::Post => [NoteColor::Orange, NoteColor::Blue],
    }
}

/// Color pre-selected when `mode` becomes active.
pub fn default_color(mode: AssessmentMode) -> NoteColor {
    available_colors(mode)[0]
}

/// Notes visible under `mode`, in stored order.
pub fn visible_notes(notes: &[Note], mode: AssessmentMode) -> Vec<&Note> {
    notes.iter().filter(|n| n.mode() == mode).collect()
}

pub fn visible_count(notes: &[Note], mode: AssessmentMode) -> usize {
    notes.iter().filter(|n| n.mode() == mode).count()
}

/// True once the partition for `mode` has reached capacity.
pub fn is_full(notes: &[Note], mode: AssessmentMode) -> bool {
    visible_count(notes, mode) >= NOTE_CAPACITY
}

/// Split into (inside `mode`, outside `mode`), both in stored order.
pub fn split(notes: Vec<Note>, mode: AssessmentMode) -> (Vec<Note>, Vec<Note>) {
    notes.into_iter().partition(|n| n.mode() == mode)
}

/// Inverse of [`split`]: the untouched notes first, then the partition.
pub fn reassemble(outside: Vec<Note>, inside: Vec<Note>) -> Vec<Note> {
    let mut notes = outside;
    notes.extend(inside);
    notes
}
