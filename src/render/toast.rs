//! Toast rendering - a single notification in the bottom-right corner.

use crate::app::KwlBoard;
use crate::notifications::{Toast, ToastVariant};
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex};

fn accent(variant: ToastVariant, cx: &Context<KwlBoard>) -> Hsla {
    match variant {
        ToastVariant::Success => hsla(142.0 / 360.0, 0.6, 0.4, 1.0),
        ToastVariant::Info => cx.theme().primary,
        ToastVariant::Error => hsla(0.0, 0.7, 0.5, 1.0),
    }
}

pub fn render_toast(toast: &Toast, reduce_motion: bool, cx: &Context<KwlBoard>) -> AnyElement {
    let bg = cx.theme().background;
    let accent = accent(toast.variant, cx);

    deferred(
        div().absolute().bottom(px(24.0)).right(px(24.0)).child(
            h_flex()
                .gap(px(10.0))
                .px(px(16.0))
                .py(px(12.0))
                .rounded(px(8.0))
                .bg(bg)
                .border_1()
                .border_color(accent)
                .shadow_lg()
                .opacity(toast.opacity(reduce_motion))
                .child(div().text_color(accent).child(toast.variant.icon()))
                .child(div().text_sm().child(toast.message.clone())),
        ),
    )
    .with_priority(2000)
    .into_any_element()
}
