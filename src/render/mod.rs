//! Rendering for the board window.
//!
//! Layout: header across the top, note form on the left, the visible
//! partition's notes filling the rest. Modals and the toast are deferred so
//! they paint above everything else.

mod header;
mod notes;
mod overlays;
mod sidebar;
mod toast;

pub use notes::DraggedNote;

use crate::app::KwlBoard;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

impl Render for KwlBoard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let reduce_motion = self.settings.reduce_motion;
        if self.board.toasts().current().is_some() && !reduce_motion {
            // Keep repainting so the toast can fade out
            window.request_animation_frame();
        }

        let bg = cx.theme().background;
        let fg = cx.theme().foreground;
        let modal = self.board.modal();
        let toast = self.board.toasts().current().cloned();

        v_flex()
            .size_full()
            .bg(bg)
            .text_color(fg)
            .child(header::render_header(self, cx))
            .child(
                h_flex()
                    .flex_1()
                    .min_h_0()
                    .items_start()
                    .child(sidebar::render_sidebar(self, cx))
                    .child(notes::render_board_region(&self.board, cx)),
            )
            .when_some(modal, |el, modal| el.child(overlays::render_modal(modal, cx)))
            .when_some(toast, |el, toast| {
                el.child(toast::render_toast(&toast, reduce_motion, cx))
            })
    }
}
