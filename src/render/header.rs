//! Header bar - topic title, assessment mode selector and board actions.

use crate::app::KwlBoard;
use crate::constants::HEADER_HEIGHT;
use crate::types::AssessmentMode;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, h_flex};

/// Render a single mode pill
fn render_mode_button(
    mode: AssessmentMode,
    selected: bool,
    cx: &mut Context<KwlBoard>,
) -> Stateful<Div> {
    let bg = if selected {
        cx.theme().primary
    } else {
        cx.theme().muted
    };
    let fg = if selected {
        cx.theme().primary_foreground
    } else {
        cx.theme().muted_foreground
    };
    let hover_bg = cx.theme().list_hover;

    div()
        .id(ElementId::Name(format!("mode-{:?}", mode).into()))
        .px(px(14.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .bg(bg)
        .text_color(fg)
        .text_sm()
        .font_weight(if selected {
            FontWeight::MEDIUM
        } else {
            FontWeight::NORMAL
        })
        .cursor_pointer()
        .hover(move |s| if selected { s } else { s.bg(hover_bg) })
        .on_click(cx.listener(move |this, _, window, cx| {
            this.set_mode(mode, window, cx);
        }))
        .child(mode.label())
}

pub fn render_header(app: &KwlBoard, cx: &mut Context<KwlBoard>) -> Div {
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;
    let current = app.board.mode();
    let exporting = app.board.is_exporting();

    h_flex()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .flex_shrink_0()
        .px(px(20.0))
        .gap(px(16.0))
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .child("KWL Board"),
        )
        .child(
            h_flex()
                .gap(px(8.0))
                .child(div().text_sm().text_color(muted_fg).child("Topic"))
                .child(Input::new(&app.title_input).w(px(280.0))),
        )
        .child(
            h_flex().gap(px(6.0)).children(
                AssessmentMode::all()
                    .iter()
                    .map(|&mode| render_mode_button(mode, mode == current, cx)),
            ),
        )
        .child(div().flex_1())
        .child(
            Button::new("clear-board")
                .label("Clear Board")
                .danger()
                .on_click(cx.listener(|this, _, _, cx| {
                    this.request_clear(cx);
                })),
        )
        .child(
            Button::new("download-board")
                .label(if exporting { "Downloading..." } else { "Download" })
                .primary()
                .on_click(cx.listener(|this, _, _, cx| {
                    this.download_board(cx);
                })),
        )
}
