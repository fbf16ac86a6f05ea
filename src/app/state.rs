//! Application state - the KwlBoard view struct.

use crate::board::BoardController;
use crate::settings::Settings;
use gpui::*;
use gpui_component::input::InputState;

/// Main window view. Board state lives in [`BoardController`]; this struct
/// only adds the widgets and subscriptions gpui needs.
pub struct KwlBoard {
    /// All board state and handlers
    pub board: BoardController,
    /// Loaded user settings
    pub settings: Settings,
    /// Topic title input in the header
    pub title_input: Entity<InputState>,
    /// Note text input in the sidebar form
    pub note_input: Entity<InputState>,
    /// Input event subscriptions, dropped with the view
    pub(super) _subscriptions: Vec<Subscription>,
}
