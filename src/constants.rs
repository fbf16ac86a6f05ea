//! Application-wide constants.
//!
//! Centralizes capacity limits, timing, storage keys and layout values so the
//! board, renderer and exporter agree on them.

use std::time::Duration;

// ============================================================================
// Board Limits
// ============================================================================

/// Maximum number of notes visible under a single assessment mode
pub const NOTE_CAPACITY: usize = 32;

// ============================================================================
// Persistence
// ============================================================================

/// Key of the single persisted board record
pub const STORAGE_KEY: &str = "kwlBoardData";

/// Directory name used under the platform data/config directories
pub const APP_DIR_NAME: &str = "kwl-board";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "KWL_BOARD_DATA_DIR";

/// Environment variable overriding the export directory
pub const EXPORT_DIR_ENV: &str = "KWL_BOARD_EXPORT_DIR";

// ============================================================================
// Export
// ============================================================================

/// Suffix appended to the sanitized topic title
pub const EXPORT_FILE_SUFFIX: &str = "_KWL_Board.png";

/// File name used when no topic title is set
pub const DEFAULT_EXPORT_FILE_NAME: &str = "KWL_Board.png";

/// Width of the exported image in pixels
pub const EXPORT_WIDTH: u32 = 1280;

/// Padding around the exported board
pub const EXPORT_PADDING: u32 = 32;

/// Exported note card size
pub const EXPORT_NOTE_SIZE: (u32, u32) = (280, 180);

/// Gap between exported note cards
pub const EXPORT_NOTE_GAP: u32 = 24;

/// Pixel size of note text, labels and the date stamp
pub const EXPORT_TEXT_SIZE: f32 = 18.0;

/// Pixel size of the title line
pub const EXPORT_TITLE_SIZE: f32 = 36.0;

/// Board background (RGBA)
pub const EXPORT_BACKGROUND: [u8; 4] = [0xF8, 0xF9, 0xFA, 0xFF];

/// Text color on the exported board (RGBA)
pub const EXPORT_TEXT_COLOR: [u8; 4] = [0x21, 0x25, 0x29, 0xFF];

/// Muted text color for labels and the date stamp (RGBA)
pub const EXPORT_MUTED_COLOR: [u8; 4] = [0x6C, 0x75, 0x7D, 0xFF];

// ============================================================================
// Animation & Timing
// ============================================================================

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Width of the form sidebar in pixels
pub const SIDEBAR_WIDTH: f32 = 320.0;

/// Rendered note card size
pub const NOTE_CARD_SIZE: (f32, f32) = (200.0, 150.0);

/// Default window size
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1280.0, 860.0);

/// Opacity of modal backdrops
pub const MODAL_BACKDROP_OPACITY: f32 = 0.5;

/// Width of confirmation modals
pub const MODAL_WIDTH: f32 = 420.0;
