//! Note form sidebar - text input, color selector and submit actions.

use crate::app::KwlBoard;
use crate::constants::{NOTE_CAPACITY, SIDEBAR_WIDTH};
use crate::partition::visible_count;
use crate::types::NoteColor;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

fn render_color_option(
    color: NoteColor,
    selected: bool,
    cx: &mut Context<KwlBoard>,
) -> Stateful<Div> {
    let fg = cx.theme().foreground;
    let hover_bg = cx.theme().list_hover;
    let ring = if selected { fg } else { transparent_black() };

    h_flex()
        .id(ElementId::Name(format!("color-{}", color).into()))
        .gap(px(10.0))
        .px(px(8.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .on_click(cx.listener(move |this, _, _, cx| {
            this.select_color(color, cx);
        }))
        .child(
            div()
                .size(px(22.0))
                .rounded_full()
                .bg(rgb(color.hex()))
                .border_2()
                .border_color(ring),
        )
        .child(div().text_sm().child(color.label()))
}

pub fn render_sidebar(app: &KwlBoard, cx: &mut Context<KwlBoard>) -> Div {
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;
    let board = &app.board;
    let editing = board.editing().is_some();
    let selected = board.selected_color();
    let count = visible_count(board.notes(), board.mode());

    v_flex()
        .w(px(SIDEBAR_WIDTH))
        .h_full()
        .flex_shrink_0()
        .p(px(20.0))
        .gap(px(14.0))
        .border_r_1()
        .border_color(border)
        .child(
            div()
                .text_base()
                .font_weight(FontWeight::SEMIBOLD)
                .child(if editing { "Edit note" } else { "Add a note" }),
        )
        .child(Input::new(&app.note_input))
        .when(!editing, |el| {
            el.child(
                v_flex()
                    .gap(px(4.0))
                    .child(div().text_xs().text_color(muted_fg).child("COLOR"))
                    .children(
                        board
                            .available_colors()
                            .into_iter()
                            .map(|color| render_color_option(color, color == selected, cx)),
                    ),
            )
        })
        .child(
            h_flex()
                .gap(px(8.0))
                .child(
                    Button::new("submit-note")
                        .label(if editing { "Update Note" } else { "Add Note" })
                        .primary()
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.submit_note(window, cx);
                        })),
                )
                .when(editing, |el| {
                    el.child(
                        Button::new("cancel-edit")
                            .label("Cancel")
                            .ghost()
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.cancel_editing(window, cx);
                            })),
                    )
                }),
        )
        .child(
            div()
                .text_xs()
                .text_color(muted_fg)
                .child(format!("{} / {} notes on this board", count, NOTE_CAPACITY)),
        )
}
