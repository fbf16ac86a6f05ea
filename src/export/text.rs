//! Text measuring, wrapping and drawing for exported boards.
//!
//! Glyphs come from the embedded DejaVu Sans face. Extra faces configured in
//! the settings are consulted, in order, for characters it does not cover.

use crate::error::{ExportError, ExportResult};
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use image::RgbaImage;
use std::path::{Path, PathBuf};

const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Vertical advance per line as a multiple of the pixel size
const LINE_SPACING: f32 = 1.25;

/// Line advance in whole pixels for text of `size`
pub fn line_height(size: f32) -> u32 {
    (size * LINE_SPACING).ceil() as u32
}

/// The faces used to draw export text
#[derive(Clone)]
pub struct FontSet {
    primary: FontArc,
    fallbacks: Vec<FontArc>,
}

impl FontSet {
    /// Only the embedded face
    pub fn embedded() -> ExportResult<Self> {
        let primary = FontArc::try_from_slice(EMBEDDED_FONT)
            .map_err(|e| ExportError::Font(format!("embedded face: {e}")))?;
        Ok(Self {
            primary,
            fallbacks: Vec::new(),
        })
    }

    /// Embedded face plus every readable face in `paths`. Faces that fail to
    /// load are logged and skipped.
    pub fn with_fallbacks(paths: &[PathBuf]) -> ExportResult<Self> {
        let mut fonts = Self::embedded()?;
        for path in paths {
            if let Err(e) = fonts.add_fallback(path) {
                tracing::warn!("Skipping export font {}: {}", path.display(), e);
            }
        }
        Ok(fonts)
    }

    pub fn add_fallback(&mut self, path: &Path) -> ExportResult<()> {
        let bytes = std::fs::read(path)?;
        let face = FontArc::try_from_vec(bytes)
            .map_err(|e| ExportError::Font(format!("{}: {e}", path.display())))?;
        self.fallbacks.push(face);
        Ok(())
    }

    pub fn fallback_count(&self) -> usize {
        self.fallbacks.len()
    }

    /// First face with a glyph for `ch`; the primary face's missing glyph otherwise.
    fn resolve(&self, ch: char) -> (&FontArc, GlyphId) {
        std::iter::once(&self.primary)
            .chain(&self.fallbacks)
            .map(|face| (face, face.glyph_id(ch)))
            .find(|(_, id)| id.0 != 0)
            .unwrap_or_else(|| (&self.primary, self.primary.glyph_id(ch)))
    }

    /// Advance width of `text` in pixels
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let scale = PxScale::from(size);
        text.chars()
            .map(|ch| {
                let (face, id) = self.resolve(ch);
                face.as_scaled(scale).h_advance(id)
            })
            .sum()
    }

    /// Draw `text` with its top edge at `y`, blending onto `img`.
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        x: u32,
        y: u32,
        text: &str,
        size: f32,
        color: [u8; 4],
    ) {
        let scale = PxScale::from(size);
        let baseline = y as f32 + self.primary.as_scaled(scale).ascent();
        let mut caret = x as f32;

        for ch in text.chars() {
            let (face, id) = self.resolve(ch);
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += face.as_scaled(scale).h_advance(id);

            let Some(outlined) = face.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + i64::from(gx);
                let py = bounds.min.y as i64 + i64::from(gy);
                blend(img, px, py, color, coverage);
            });
        }
    }

    /// Greedy word wrap to lines no wider than `max_width` pixels. Words
    /// wider than a line are broken between characters.
    pub fn wrap(&self, text: &str, max_width: f32, size: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();

        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if self.text_width(&candidate, size) <= max_width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            for ch in word.chars() {
                line.push(ch);
                if line.chars().count() > 1 && self.text_width(&line, size) > max_width {
                    line.pop();
                    lines.push(std::mem::replace(&mut line, ch.to_string()));
                }
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Truncate `text` with an ellipsis so it fits in `max_width` pixels.
    pub fn fit(&self, text: &str, max_width: f32, size: f32) -> String {
        if self.text_width(text, size) <= max_width {
            return text.to_string();
        }
        let mut chars: Vec<char> = text.chars().collect();
        while !chars.is_empty() {
            chars.pop();
            let candidate: String = chars.iter().collect::<String>() + "...";
            if self.text_width(&candidate, size) <= max_width {
                return candidate;
            }
        }
        "...".to_string()
    }
}

fn blend(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 4], coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    let dst = img.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let mixed = f32::from(color[i]) * alpha + f32::from(dst.0[i]) * (1.0 - alpha);
        dst.0[i] = mixed.round() as u8;
    }
}
