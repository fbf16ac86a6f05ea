//! Modal overlays.

mod confirm;
mod modal_base;

pub use confirm::render_modal;
