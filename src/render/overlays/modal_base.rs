//! Shared modal pieces - backdrop and dialog frame.

use crate::app::KwlBoard;
use crate::constants::{MODAL_BACKDROP_OPACITY, MODAL_WIDTH};
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

/// Renders a dimmed backdrop that closes the modal when clicked outside the
/// dialog. Clicks on the dialog stop propagation before reaching the backdrop.
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    cx: &mut Context<KwlBoard>,
    on_backdrop_click: impl Fn(&mut KwlBoard, &MouseDownEvent, &mut Window, &mut Context<KwlBoard>)
    + 'static,
    dialog: impl IntoElement,
) -> AnyElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_click))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(dialog),
    )
    .with_priority(1500)
    .into_any_element()
}

/// Dialog frame with a title and body text. Actions are added by the caller.
pub fn render_dialog(title: &str, body: &str, cx: &Context<KwlBoard>) -> Div {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;

    v_flex()
        .w(px(MODAL_WIDTH))
        .p(px(20.0))
        .gap(px(12.0))
        .bg(bg)
        .border_1()
        .border_color(border)
        .rounded(px(10.0))
        .shadow_lg()
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .child(
            div()
                .text_base()
                .font_weight(FontWeight::SEMIBOLD)
                .child(title.to_string()),
        )
        .child(
            div()
                .text_sm()
                .text_color(muted_fg)
                .child(body.to_string()),
        )
}
