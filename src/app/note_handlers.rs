//! Note, form, mode and clear handlers.
//!
//! Each handler forwards to the board controller, then syncs the form widget
//! and schedules the toast the controller left behind.

use super::KwlBoard;
use crate::board::SubmitOutcome;
use crate::types::{AssessmentMode, NoteColor};
use gpui::*;

impl KwlBoard {
    /// Add a note, or save the note being edited, from the form text.
    pub fn submit_note(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.note_input.read(cx).value().to_string();
        // A rejected note keeps its text so the user can fix it
        if let Ok(outcome) = self.board.submit(&text) {
            if let SubmitOutcome::Added(note) = &outcome {
                tracing::debug!("Form added note {}", note.id);
            }
            self.clear_note_input(window, cx);
        }
        self.after_change(cx);
    }

    pub fn start_editing(&mut self, id: String, window: &mut Window, cx: &mut Context<Self>) {
        let Some(text) = self.board.begin_edit(&id) else {
            return;
        };
        self.note_input.update(cx, |state, cx| {
            state.set_value(text, window, cx);
            state.focus(window, cx);
        });
        cx.notify();
    }

    pub fn cancel_editing(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.board.cancel_edit();
        self.clear_note_input(window, cx);
        cx.notify();
    }

    pub fn delete_note(&mut self, id: String, window: &mut Window, cx: &mut Context<Self>) {
        let was_editing = self.board.editing() == Some(id.as_str());
        self.board.delete_note(&id);
        if was_editing {
            self.clear_note_input(window, cx);
        }
        self.after_change(cx);
    }

    /// Drop handler for note drags within the visible partition
    pub fn reorder_note(
        &mut self,
        source: usize,
        destination: Option<usize>,
        cx: &mut Context<Self>,
    ) {
        self.board.reorder(source, destination);
        cx.notify();
    }

    pub fn set_mode(&mut self, mode: AssessmentMode, window: &mut Window, cx: &mut Context<Self>) {
        let was_editing = self.board.editing().is_some();
        self.board.set_mode(mode);
        if was_editing {
            self.clear_note_input(window, cx);
        }
        cx.notify();
    }

    pub fn select_color(&mut self, color: NoteColor, cx: &mut Context<Self>) {
        if self.board.select_color(color) {
            cx.notify();
        }
    }

    pub fn request_clear(&mut self, cx: &mut Context<Self>) {
        self.board.request_clear();
        cx.notify();
    }

    pub fn confirm_clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let was_editing = self.board.editing().is_some();
        self.board.confirm_clear();
        if was_editing && self.board.editing().is_none() {
            self.clear_note_input(window, cx);
        }
        self.after_change(cx);
    }

    pub fn close_modal(&mut self, cx: &mut Context<Self>) {
        self.board.dismiss_modal();
        cx.notify();
    }

    fn clear_note_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.note_input.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
    }

    pub(super) fn after_change(&mut self, cx: &mut Context<Self>) {
        self.schedule_toast_dismiss(cx);
        cx.notify();
    }
}
