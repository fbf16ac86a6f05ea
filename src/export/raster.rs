//! Software rasterizer for exported boards.
//!
//! Draws straight into an `RgbaImage`: a header with the topic title and mode,
//! the date stamp in the top-right corner, then the notes as a grid of cards
//! in visible order.

use super::text::{FontSet, line_height};
use super::{BoardScene, Rasterizer};
use crate::constants::{
    EXPORT_BACKGROUND, EXPORT_MUTED_COLOR, EXPORT_NOTE_GAP, EXPORT_NOTE_SIZE, EXPORT_PADDING,
    EXPORT_TEXT_COLOR, EXPORT_TEXT_SIZE, EXPORT_TITLE_SIZE, EXPORT_WIDTH,
};
use crate::error::ExportResult;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

const CARD_PADDING: u32 = 12;
const SHADOW_OFFSET: u32 = 3;
const SHADOW_COLOR: [u8; 4] = [0xD0, 0xD4, 0xD9, 0xFF];

/// Draws scenes with a [`FontSet`]
#[derive(Clone)]
pub struct BoardRasterizer {
    fonts: FontSet,
}

impl BoardRasterizer {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Embedded face plus the configured fallback faces
    pub fn with_fallbacks(paths: &[PathBuf]) -> ExportResult<Self> {
        Ok(Self::new(FontSet::with_fallbacks(paths)?))
    }

    fn columns() -> u32 {
        let usable = EXPORT_WIDTH - 2 * EXPORT_PADDING + EXPORT_NOTE_GAP;
        (usable / (EXPORT_NOTE_SIZE.0 + EXPORT_NOTE_GAP)).max(1)
    }

    fn header_height() -> u32 {
        EXPORT_PADDING
            + line_height(EXPORT_TITLE_SIZE)
            + line_height(EXPORT_TEXT_SIZE)
            + EXPORT_NOTE_GAP
    }

    /// Image height needed for `note_count` cards (at least one empty row)
    pub fn height_for(note_count: usize) -> u32 {
        let rows = (note_count as u32).div_ceil(Self::columns()).max(1);
        Self::header_height() + rows * (EXPORT_NOTE_SIZE.1 + EXPORT_NOTE_GAP) + EXPORT_PADDING
    }

    fn draw_card(
        &self,
        img: &mut RgbaImage,
        x: u32,
        y: u32,
        text: &str,
        label: &str,
        fill: [u8; 4],
    ) {
        let (w, h) = EXPORT_NOTE_SIZE;
        fill_rect(img, x + SHADOW_OFFSET, y + SHADOW_OFFSET, w, h, SHADOW_COLOR);
        fill_rect(img, x, y, w, h, fill);

        let size = EXPORT_TEXT_SIZE;
        let line = line_height(size);
        let max_width = (w - 2 * CARD_PADDING) as f32;
        // Bottom line is reserved for the category label
        let max_lines = ((h - 2 * CARD_PADDING) / line).saturating_sub(1) as usize;

        let mut lines = self.fonts.wrap(text, max_width, size);
        if lines.len() > max_lines {
            lines.truncate(max_lines);
            if let Some(last) = lines.last_mut() {
                *last = self.fonts.fit(&format!("{last}..."), max_width, size);
            }
        }

        for (row, text_line) in lines.iter().enumerate() {
            let ly = y + CARD_PADDING + row as u32 * line;
            self.fonts.draw_text(img, x + CARD_PADDING, ly, text_line, size, EXPORT_TEXT_COLOR);
        }

        let label_y = y + h - CARD_PADDING - line;
        self.fonts.draw_text(img, x + CARD_PADDING, label_y, label, size, EXPORT_MUTED_COLOR);
    }
}

impl Rasterizer for BoardRasterizer {
    fn rasterize(&self, scene: &BoardScene) -> ExportResult<RgbaImage> {
        let height = Self::height_for(scene.notes.len());
        let mut img = RgbaImage::from_pixel(EXPORT_WIDTH, height, Rgba(EXPORT_BACKGROUND));
        let max_text = (EXPORT_WIDTH - 2 * EXPORT_PADDING) as f32;

        // Header
        let title = scene.title.trim();
        let title = if title.is_empty() { "KWL Board" } else { title };
        let title = self.fonts.fit(title, max_text / 2.0, EXPORT_TITLE_SIZE);
        self.fonts.draw_text(
            &mut img,
            EXPORT_PADDING,
            EXPORT_PADDING,
            &title,
            EXPORT_TITLE_SIZE,
            EXPORT_TEXT_COLOR,
        );
        self.fonts.draw_text(
            &mut img,
            EXPORT_PADDING,
            EXPORT_PADDING + line_height(EXPORT_TITLE_SIZE),
            scene.mode.label(),
            EXPORT_TEXT_SIZE,
            EXPORT_MUTED_COLOR,
        );

        if let Some(stamp) = &scene.stamp {
            let width = self.fonts.text_width(stamp, EXPORT_TEXT_SIZE).ceil() as u32;
            let x = EXPORT_WIDTH.saturating_sub(EXPORT_PADDING + width);
            self.fonts.draw_text(
                &mut img,
                x,
                EXPORT_PADDING,
                stamp,
                EXPORT_TEXT_SIZE,
                EXPORT_MUTED_COLOR,
            );
        }

        // Notes
        let columns = Self::columns();
        let top = Self::header_height();
        for (i, note) in scene.notes.iter().enumerate() {
            let i = i as u32;
            let x = EXPORT_PADDING + (i % columns) * (EXPORT_NOTE_SIZE.0 + EXPORT_NOTE_GAP);
            let y = top + (i / columns) * (EXPORT_NOTE_SIZE.1 + EXPORT_NOTE_GAP);
            self.draw_card(
                &mut img,
                x,
                y,
                &note.text,
                note.category.label(),
                note.color.rgba(),
            );
        }

        Ok(img)
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: [u8; 4]) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, Rgba(color));
        }
    }
}
