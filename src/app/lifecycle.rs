//! Application lifecycle - initialization and input subscriptions.

use super::KwlBoard;
use crate::board::BoardController;
use crate::settings::Settings;
use crate::storage::FileStorage;
use gpui::*;
use gpui_component::input::{InputEvent, InputState};

impl KwlBoard {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let storage = FileStorage::new(settings.resolved_data_dir());
        tracing::info!("Board data directory: {}", storage.dir().display());
        let board = BoardController::load(Box::new(storage));

        let title = board.topic_title().to_string();
        let title_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Enter a topic...")
                .default_value(title)
        });
        let note_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Type your note here..."));

        let subscriptions = vec![
            // Every keystroke in the title is mirrored to storage
            cx.subscribe(&title_input, |this, input, event: &InputEvent, cx| {
                if let InputEvent::Change { .. } = event {
                    let value = input.read(cx).value().to_string();
                    this.board.set_topic_title(value);
                    cx.notify();
                }
            }),
            cx.subscribe_in(&note_input, window, |this, _input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.submit_note(window, cx);
                }
            }),
        ];

        Self {
            board,
            settings,
            title_input,
            note_input,
            _subscriptions: subscriptions,
        }
    }

    /// Remove the current toast once its display time has passed.
    pub(super) fn schedule_toast_dismiss(&mut self, cx: &mut Context<Self>) {
        let Some(toast) = self.board.toasts().current() else {
            return;
        };
        let (id, duration) = (toast.id, toast.duration);
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(duration).await;
            this.update(cx, |this, cx| {
                // A newer toast may have replaced this one
                if this.board.toasts_mut().remove(id) {
                    cx.notify();
                }
            })
            .ok();
        })
        .detach();
    }
}
