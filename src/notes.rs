//! Note operations over the full collection.
//!
//! Each operation takes the current collection and returns a new one; the
//! input is never mutated, so a rejected operation leaves state untouched.

use crate::constants::NOTE_CAPACITY;
use crate::error::{NoteError, NoteResult};
use crate::partition::{is_full, reassemble, split};
use crate::types::{AssessmentMode, Note, NoteColor};
use rand::Rng;

/// Trim `text`, rejecting it if nothing is left.
pub fn normalize_text(text: &str) -> NoteResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(NoteError::EmptyText)
    } else {
        Ok(trimmed)
    }
}

/// Add a note of `color`, dropping it at a random position of its partition.
///
/// Returns the new collection and the created note.
pub fn add_note<R: Rng + ?Sized>(
    notes: &[Note],
    text: &str,
    color: NoteColor,
    rng: &mut R,
) -> NoteResult<(Vec<Note>, Note)> {
    let text = normalize_text(text)?;
    let mode = color.mode();
    if is_full(notes, mode) {
        return Err(NoteError::BoardFull {
            mode,
            capacity: NOTE_CAPACITY,
        });
    }

    let note = Note::new(text, color);
    let (mut inside, outside) = split(notes.to_vec(), mode);
    let index = rng.gen_range(0..=inside.len());
    inside.insert(index, note.clone());

    Ok((reassemble(outside, inside), note))
}

/// Replace the text of note `id` in place.
pub fn edit_note(notes: &[Note], id: &str, text: &str) -> NoteResult<Vec<Note>> {
    let text = normalize_text(text)?;
    let mut updated = notes.to_vec();
    let note = updated
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| NoteError::NotFound(id.to_string()))?;
    note.text = text.to_string();
    Ok(updated)
}

/// Remove note `id`. The flag reports whether anything was removed.
pub fn delete_note(notes: &[Note], id: &str) -> (Vec<Note>, bool) {
    let remaining: Vec<Note> = notes.iter().filter(|n| n.id != id).cloned().collect();
    let removed = remaining.len() != notes.len();
    (remaining, removed)
}

/// Move the note at `source` to `destination` within the `mode` partition.
///
/// Indices refer to the visible ordering. A missing destination (cancelled
/// drag) or an out-of-range index returns the collection unchanged.
pub fn reorder_notes(
    notes: &[Note],
    mode: AssessmentMode,
    source: usize,
    destination: Option<usize>,
) -> Vec<Note> {
    let Some(destination) = destination else {
        return notes.to_vec();
    };

    let (mut inside, outside) = split(notes.to_vec(), mode);
    if source >= inside.len() || destination >= inside.len() {
        return notes.to_vec();
    }
    if source == destination {
        return notes.to_vec();
    }

    let moved = inside.remove(source);
    inside.insert(destination, moved);
    reassemble(outside, inside)
}

/// Drop the notes whose ids are in `ids`, keeping the order of the rest.
pub fn remove_notes(notes: &[Note], ids: &[String]) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| !ids.contains(&n.id))
        .cloned()
        .collect()
}

/// Drop every note visible under `mode`; the other partition is untouched.
pub fn clear_partition(notes: &[Note], mode: AssessmentMode) -> Vec<Note> {
    notes.iter().filter(|n| n.mode() != mode).cloned().collect()
}
