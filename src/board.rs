//! The board controller - owns all board state and the handlers that mutate it.
//!
//! The gpui view forwards every user event here. Each handler validates,
//! applies a note operation, mirrors the result to storage and leaves a toast
//! or modal describing the outcome. Nothing in this module depends on gpui so
//! the whole interaction flow is testable without a window.

use crate::error::{ExportResult, NoteError, NoteResult};
use crate::export::{BoardScene, ExportJob};
use crate::notes;
use crate::notifications::{Toast, ToastManager};
use crate::partition;
use crate::storage::{BoardSnapshot, Storage, load_snapshot, save_snapshot};
use crate::types::{AssessmentMode, Note, NoteColor};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Which confirmation modal is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    /// A note was rejected because the partition is full; offers export then clear
    BoardFull { mode: AssessmentMode },
    /// Confirm clearing every note of a partition
    ConfirmClear { mode: AssessmentMode },
}

/// Result of submitting the note form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Note),
    Updated { id: String },
}

/// An export that has been started but not finished
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingExport {
    stamp: String,
    /// Notes in the exported image, removed once the export succeeds
    clear_after: Option<Vec<String>>,
}

pub struct BoardController {
    topic_title: String,
    notes: Vec<Note>,
    mode: AssessmentMode,
    /// Color used for the next new note; always in the active mode's palette
    selected_color: NoteColor,
    /// Note whose text the form is editing
    editing: Option<String>,
    modal: Option<Modal>,
    toasts: ToastManager,
    export: Option<PendingExport>,
    storage: Box<dyn Storage>,
    rng: StdRng,
}

impl BoardController {
    /// Hydrate from `storage`. Unreadable data yields an empty board.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        Self::load_with_rng(storage, StdRng::from_entropy())
    }

    /// Like [`BoardController::load`] with a fixed random source for note placement.
    pub fn load_with_rng(storage: Box<dyn Storage>, rng: StdRng) -> Self {
        let snapshot = load_snapshot(storage.as_ref());
        tracing::info!(
            "Loaded board with {} note(s), title {:?}",
            snapshot.notes.len(),
            snapshot.topic_title
        );
        let mode = AssessmentMode::default();
        Self {
            topic_title: snapshot.topic_title,
            notes: snapshot.notes,
            mode,
            selected_color: partition::default_color(mode),
            editing: None,
            modal: None,
            toasts: ToastManager::new(),
            export: None,
            storage,
            rng,
        }
    }

    // ==================== Accessors ====================

    pub fn topic_title(&self) -> &str {
        &self.topic_title
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn selected_color(&self) -> NoteColor {
        self.selected_color
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        partition::visible_notes(&self.notes, self.mode)
    }

    pub fn available_colors(&self) -> [NoteColor; 2] {
        partition::available_colors(self.mode)
    }

    pub fn is_full(&self) -> bool {
        partition::is_full(&self.notes, self.mode)
    }

    /// Date stamp shown on the live board while an export is running
    pub fn export_stamp(&self) -> Option<&str> {
        self.export.as_ref().map(|e| e.stamp.as_str())
    }

    pub fn is_exporting(&self) -> bool {
        self.export.is_some()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            topic_title: self.topic_title.clone(),
            notes: self.notes.clone(),
        }
    }

    // ==================== State Changes ====================

    pub fn set_topic_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title == self.topic_title {
            return;
        }
        self.topic_title = title;
        self.persist();
    }

    /// Switch the visible partition. Notes are untouched; the selected color
    /// falls back to the new palette's default if it no longer applies.
    pub fn set_mode(&mut self, mode: AssessmentMode) {
        if mode == self.mode {
            return;
        }
        tracing::debug!("Switching to {:?}", mode);
        self.mode = mode;
        if !partition::available_colors(mode).contains(&self.selected_color) {
            self.selected_color = partition::default_color(mode);
        }
        // Editing targets belong to the partition that was visible
        self.editing = None;
    }

    /// Pick the color for the next note. Colors outside the active palette are ignored.
    pub fn select_color(&mut self, color: NoteColor) -> bool {
        if self.available_colors().contains(&color) {
            self.selected_color = color;
            true
        } else {
            false
        }
    }

    // ==================== Note Operations ====================

    /// Add a note. Empty text shows a toast; a full partition opens the
    /// board-full modal. Neither changes the notes.
    pub fn add_note(&mut self, text: &str, color: NoteColor) -> NoteResult<Note> {
        match notes::add_note(&self.notes, text, color, &mut self.rng) {
            Ok((updated, note)) => {
                tracing::debug!("Added note {} ({})", note.id, note.color);
                self.notes = updated;
                self.persist();
                self.toasts.push(Toast::success("Note added!"));
                Ok(note)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    pub fn edit_note(&mut self, id: &str, text: &str) -> NoteResult<()> {
        match notes::edit_note(&self.notes, id, text) {
            Ok(updated) => {
                tracing::debug!("Edited note {}", id);
                self.notes = updated;
                self.persist();
                self.toasts.push(Toast::success("Note updated!"));
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Remove a note. Always reports success, even if it was already gone.
    pub fn delete_note(&mut self, id: &str) {
        let (updated, removed) = notes::delete_note(&self.notes, id);
        if removed {
            tracing::debug!("Deleted note {}", id);
            self.notes = updated;
            self.persist();
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.toasts.push(Toast::success("Note deleted!"));
    }

    /// Move a note within the visible partition. `None` means the drag was cancelled.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) {
        let updated = notes::reorder_notes(&self.notes, self.mode, source, destination);
        if updated != self.notes {
            self.notes = updated;
            self.persist();
        }
    }

    /// Submit the form: edits the note being edited, otherwise adds a note
    /// in the selected color.
    pub fn submit(&mut self, text: &str) -> NoteResult<SubmitOutcome> {
        match self.editing.clone() {
            Some(id) => {
                self.edit_note(&id, text)?;
                self.editing = None;
                Ok(SubmitOutcome::Updated { id })
            }
            None => self.add_note(text, self.selected_color).map(SubmitOutcome::Added),
        }
    }

    /// Start editing `id`; returns the text to load into the form.
    pub fn begin_edit(&mut self, id: &str) -> Option<String> {
        let note = self.notes.iter().find(|n| n.id == id)?;
        self.editing = Some(note.id.clone());
        Some(note.text.clone())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ==================== Clearing ====================

    /// Ask for confirmation before clearing the visible partition.
    pub fn request_clear(&mut self) {
        self.modal = Some(Modal::ConfirmClear { mode: self.mode });
    }

    /// Clear the partition named by the open confirmation modal.
    pub fn confirm_clear(&mut self) {
        let Some(Modal::ConfirmClear { mode }) = self.modal else {
            return;
        };
        self.modal = None;
        self.clear_partition(mode);
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    fn clear_partition(&mut self, mode: AssessmentMode) {
        tracing::info!("Clearing {:?} notes", mode);
        let updated = notes::clear_partition(&self.notes, mode);
        self.replace_cleared(updated);
    }

    fn replace_cleared(&mut self, updated: Vec<Note>) {
        self.notes = updated;
        if self
            .editing
            .as_ref()
            .is_some_and(|id| !self.notes.iter().any(|n| &n.id == id))
        {
            self.editing = None;
        }
        self.persist();
        self.toasts.push(Toast::success("Board cleared!"));
    }

    // ==================== Export ====================

    /// Start exporting the visible board into `dir`. The stamp stays on the
    /// live board until [`BoardController::finish_export`]. Returns `None`
    /// if an export is already running.
    pub fn begin_export(&mut self, stamp: impl Into<String>, dir: &Path) -> Option<ExportJob> {
        if self.refuse_concurrent_export() {
            return None;
        }
        Some(self.start_export(stamp.into(), dir.to_path_buf(), self.mode, false))
    }

    /// Board-full modal action: export the full partition, then remove the
    /// exported notes if the export succeeded. While another export runs the
    /// modal stays open.
    pub fn begin_export_and_clear(
        &mut self,
        stamp: impl Into<String>,
        dir: &Path,
    ) -> Option<ExportJob> {
        let Some(Modal::BoardFull { mode }) = self.modal else {
            return None;
        };
        // Keep the prompt open if the download cannot start yet
        if self.refuse_concurrent_export() {
            return None;
        }
        self.modal = None;
        Some(self.start_export(stamp.into(), dir.to_path_buf(), mode, true))
    }

    fn refuse_concurrent_export(&mut self) -> bool {
        if self.export.is_some() {
            self.toasts.push(Toast::info("Download already in progress"));
            true
        } else {
            false
        }
    }

    fn start_export(
        &mut self,
        stamp: String,
        dir: PathBuf,
        mode: AssessmentMode,
        clear: bool,
    ) -> ExportJob {
        let scene = BoardScene::capture(&self.topic_title, mode, &self.notes);
        let clear_after = clear.then(|| {
            partition::visible_notes(&self.notes, mode)
                .into_iter()
                .map(|n| n.id.clone())
                .collect()
        });
        self.export = Some(PendingExport {
            stamp: stamp.clone(),
            clear_after,
        });
        ExportJob::new(scene, stamp, dir)
    }

    /// Record the outcome of the running export. The live stamp is removed
    /// either way.
    pub fn finish_export(&mut self, result: ExportResult<PathBuf>) {
        let Some(pending) = self.export.take() else {
            return;
        };
        match result {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let message = match pending.clear_after {
                    Some(ids) => {
                        // Notes added while the export ran were not in the image and stay
                        tracing::info!("Clearing {} exported note(s)", ids.len());
                        let updated = notes::remove_notes(&self.notes, &ids);
                        self.replace_cleared(updated);
                        format!("Board downloaded as {name} and cleared")
                    }
                    None => format!("Board downloaded as {name}"),
                };
                self.toasts.push(Toast::success(message));
            }
            Err(e) => {
                tracing::error!("Board export failed: {}", e);
                self.toasts.push(Toast::error("Failed to download board"));
            }
        }
    }

    // ==================== Internals ====================

    fn report(&mut self, err: &NoteError) {
        match err {
            NoteError::BoardFull { mode, .. } => {
                tracing::info!("{}", err);
                self.modal = Some(Modal::BoardFull { mode: *mode });
            }
            NoteError::EmptyText | NoteError::NotFound(_) => {
                self.toasts.push(Toast::error(err.to_string()));
            }
        }
    }

    fn persist(&self) {
        save_snapshot(self.storage.as_ref(), &self.snapshot());
    }
}
