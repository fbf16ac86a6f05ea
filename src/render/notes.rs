//! Board region - the visible partition's notes as draggable cards.
//!
//! Dragging a card's handle onto another card moves it to that card's
//! position. Dropping anywhere else cancels the drag and nothing changes.

use crate::app::KwlBoard;
use crate::board::BoardController;
use crate::constants::NOTE_CARD_SIZE;
use crate::types::{Note, NoteColor};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

const NOTE_TEXT_COLOR: u32 = 0x212529;
const NOTE_MUTED_COLOR: u32 = 0x6C757D;

/// Drag payload carried while a note is being moved
#[derive(Clone)]
pub struct DraggedNote {
    /// Index in the visible partition when the drag started
    pub index: usize,
    pub text: SharedString,
    pub color: NoteColor,
}

impl Render for DraggedNote {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w(px(NOTE_CARD_SIZE.0))
            .p(px(12.0))
            .rounded(px(6.0))
            .bg(rgb(self.color.hex()))
            .opacity(0.85)
            .shadow_lg()
            .text_sm()
            .text_color(rgb(NOTE_TEXT_COLOR))
            .child(self.text.clone())
    }
}

fn render_note_action(
    id: String,
    action: &'static str,
    glyph: &'static str,
) -> Stateful<Div> {
    div()
        .id(ElementId::Name(format!("{}-{}", action, id).into()))
        .px(px(6.0))
        .py(px(2.0))
        .rounded(px(4.0))
        .cursor_pointer()
        .text_color(rgb(NOTE_MUTED_COLOR))
        .hover(|s| s.bg(hsla(0.0, 0.0, 0.0, 0.08)))
        .child(glyph)
}

fn render_note_card(
    index: usize,
    note: &Note,
    editing: bool,
    cx: &mut Context<KwlBoard>,
) -> Stateful<Div> {
    let primary = cx.theme().primary;
    let drop_color = cx.theme().primary.opacity(0.6);
    let edit_id = note.id.clone();
    let delete_id = note.id.clone();
    let edit_button = render_note_action(note.id.clone(), "edit", "✎").on_click(cx.listener(
        move |this, _, window, cx| this.start_editing(edit_id.clone(), window, cx),
    ));
    let delete_button = render_note_action(note.id.clone(), "delete", "✕").on_click(
        cx.listener(move |this, _, window, cx| this.delete_note(delete_id.clone(), window, cx)),
    );
    let dragged = DraggedNote {
        index,
        text: note.text.clone().into(),
        color: note.color,
    };

    div()
        .id(ElementId::Name(format!("note-{}", note.id).into()))
        .w(px(NOTE_CARD_SIZE.0))
        .min_h(px(NOTE_CARD_SIZE.1))
        .p(px(12.0))
        .rounded(px(6.0))
        .bg(rgb(note.color.hex()))
        .shadow_md()
        .border_2()
        .border_color(if editing { primary } else { transparent_black() })
        .text_color(rgb(NOTE_TEXT_COLOR))
        .drag_over::<DraggedNote>(move |style, _, _, _| style.border_color(drop_color))
        .on_drop(cx.listener(move |this, dragged: &DraggedNote, _window, cx| {
            this.reorder_note(dragged.index, Some(index), cx);
        }))
        .child(
            v_flex()
                .size_full()
                .gap(px(8.0))
                .child(
                    h_flex()
                        .justify_between()
                        .child(
                            div()
                                .id(ElementId::Name(format!("handle-{}", note.id).into()))
                                .px(px(4.0))
                                .cursor_grab()
                                .text_color(rgb(NOTE_MUTED_COLOR))
                                .on_drag(dragged, |dragged, _offset, _window, cx| {
                                    cx.new(|_| dragged.clone())
                                })
                                .child("⠿"),
                        )
                        .child(
                            h_flex()
                                .gap(px(2.0))
                                .child(edit_button)
                                .child(delete_button),
                        ),
                )
                .child(div().flex_1().text_sm().child(note.text.clone()))
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(NOTE_MUTED_COLOR))
                        .child(note.category.label()),
                ),
        )
}

pub fn render_board_region(board: &BoardController, cx: &mut Context<KwlBoard>) -> Stateful<Div> {
    let muted_fg = cx.theme().muted_foreground;
    let visible = board.visible_notes();
    let editing = board.editing().map(str::to_string);
    let stamp = board.export_stamp().map(str::to_string);
    let empty = visible.is_empty();

    let cards: Vec<Stateful<Div>> = visible
        .into_iter()
        .enumerate()
        .map(|(index, note)| {
            let is_editing = editing.as_deref() == Some(note.id.as_str());
            render_note_card(index, note, is_editing, cx)
        })
        .collect();

    div()
        .id("board-region")
        .relative()
        .flex_1()
        .h_full()
        .overflow_y_scroll()
        .p(px(24.0))
        .child(
            div()
                .text_sm()
                .text_color(muted_fg)
                .mb(px(16.0))
                .child(board.mode().label()),
        )
        .when(empty, |el| {
            el.child(
                div()
                    .text_sm()
                    .text_color(muted_fg)
                    .child("No notes yet. Add one from the form on the left."),
            )
        })
        .child(
            h_flex()
                .flex_wrap()
                .items_start()
                .gap(px(16.0))
                .children(cards),
        )
        // Date stamp is only shown while an export is capturing
        .when_some(stamp, |el, stamp| {
            el.child(
                div()
                    .absolute()
                    .top(px(16.0))
                    .right(px(24.0))
                    .text_sm()
                    .text_color(muted_fg)
                    .child(stamp),
            )
        })
}
