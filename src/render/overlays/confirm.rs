//! Confirmation modals - board full and clear board.

use super::modal_base::{render_dialog, render_modal_backdrop};
use crate::app::KwlBoard;
use crate::board::Modal;
use crate::constants::NOTE_CAPACITY;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::h_flex;

pub fn render_modal(modal: Modal, cx: &mut Context<KwlBoard>) -> AnyElement {
    let (title, body) = match modal {
        Modal::BoardFull { mode } => (
            "Board is full".to_string(),
            format!(
                "The {} board already holds {} notes. Download it and start a fresh board?",
                mode.label(),
                NOTE_CAPACITY
            ),
        ),
        Modal::ConfirmClear { mode } => (
            "Clear board?".to_string(),
            format!(
                "This removes every note on the {} board. Notes on the other board are kept.",
                mode.label()
            ),
        ),
    };

    let confirm = match modal {
        Modal::BoardFull { .. } => Button::new("modal-confirm")
            .label("Download & Clear")
            .primary()
            .on_click(cx.listener(|this, _, _, cx| {
                this.download_and_clear(cx);
            })),
        Modal::ConfirmClear { .. } => Button::new("modal-confirm")
            .label("Clear")
            .danger()
            .on_click(cx.listener(|this, _, window, cx| {
                this.confirm_clear(window, cx);
            })),
    };

    let dialog = render_dialog(&title, &body, cx).child(
        h_flex()
            .w_full()
            .justify_end()
            .gap(px(12.0))
            .child(
                Button::new("modal-cancel")
                    .label("Cancel")
                    .ghost()
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.close_modal(cx);
                    })),
            )
            .child(confirm),
    );

    render_modal_backdrop(
        "modal-backdrop",
        cx,
        |this, _, _, cx| this.close_modal(cx),
        dialog,
    )
}
