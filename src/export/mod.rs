//! Board export - rasterizes the visible board into a PNG download.
//!
//! The exporter works on a [`BoardScene`], a detached copy of what the board
//! shows for one mode. A date stamp is attached to the scene for the duration
//! of a single capture and removed afterwards whether or not the capture
//! succeeded, so it never leaks into the live board or the saved record.
//!
//! Capture and PNG encoding are independent of the UI thread; the gpui view
//! runs [`ExportJob::run`] on its background executor.

mod raster;
mod text;

pub use raster::BoardRasterizer;
pub use text::FontSet;

use crate::constants::{DEFAULT_EXPORT_FILE_NAME, EXPORT_FILE_SUFFIX};
use crate::error::{ExportError, ExportResult};
use crate::partition::visible_notes;
use crate::types::{AssessmentMode, Category, Note, NoteColor};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A note as it appears in an export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneNote {
    pub text: String,
    pub color: NoteColor,
    pub category: Category,
}

/// Everything the exporter draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardScene {
    pub title: String,
    pub mode: AssessmentMode,
    pub notes: Vec<SceneNote>,
    /// Date stamp drawn in the top-right corner; only set during capture
    pub stamp: Option<String>,
}

impl BoardScene {
    /// Snapshot the notes visible under `mode`.
    pub fn capture(title: &str, mode: AssessmentMode, notes: &[Note]) -> Self {
        Self {
            title: title.to_string(),
            mode,
            notes: visible_notes(notes, mode)
                .into_iter()
                .map(|n| SceneNote {
                    text: n.text.clone(),
                    color: n.color,
                    category: n.category,
                })
                .collect(),
            stamp: None,
        }
    }
}

/// Turns a scene into pixels.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, scene: &BoardScene) -> ExportResult<RgbaImage>;
}

/// Holds the stamp on a scene and takes it off again when dropped.
pub struct StampGuard<'a> {
    scene: &'a mut BoardScene,
}

impl<'a> StampGuard<'a> {
    pub fn attach(scene: &'a mut BoardScene, stamp: impl Into<String>) -> Self {
        scene.stamp = Some(stamp.into());
        Self { scene }
    }
}

impl Deref for StampGuard<'_> {
    type Target = BoardScene;

    fn deref(&self) -> &BoardScene {
        self.scene
    }
}

impl Drop for StampGuard<'_> {
    fn drop(&mut self) {
        self.scene.stamp = None;
    }
}

/// Rasterize `scene` with `stamp` overlaid. The scene carries no stamp
/// afterwards, on success or failure.
pub fn capture_with_stamp(
    scene: &mut BoardScene,
    stamp: &str,
    rasterizer: &dyn Rasterizer,
) -> ExportResult<RgbaImage> {
    let guard = StampGuard::attach(scene, stamp);
    rasterizer.rasterize(&guard)
}

/// File name for an export of a board titled `title`.
///
/// Every character outside ASCII letters and digits becomes `_`, including
/// surrounding spaces. A blank title gets the default name.
pub fn export_file_name(title: &str) -> String {
    if title.trim().is_empty() {
        return DEFAULT_EXPORT_FILE_NAME.to_string();
    }
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{sanitized}{EXPORT_FILE_SUFFIX}")
}

/// Stamp text for a given day, e.g. `Exported: October 19, 2026`
pub fn date_stamp(date: chrono::NaiveDate) -> String {
    format!("Exported: {}", date.format("%B %-d, %Y"))
}

/// Stamp text for today in local time
pub fn today_stamp() -> String {
    date_stamp(chrono::Local::now().date_naive())
}

pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write `bytes` as `file_name` inside `dir`, creating the directory.
pub fn write_export(dir: &Path, file_name: &str, bytes: &[u8]) -> ExportResult<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(ExportError::NoDestination);
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// A complete export, ready to run off the UI thread.
pub struct ExportJob {
    pub scene: BoardScene,
    pub stamp: String,
    pub dir: PathBuf,
}

impl ExportJob {
    pub fn new(scene: BoardScene, stamp: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            scene,
            stamp: stamp.into(),
            dir: dir.into(),
        }
    }

    pub fn file_name(&self) -> String {
        export_file_name(&self.scene.title)
    }

    /// Capture, encode and write. Returns the written path.
    pub fn run(mut self, rasterizer: &dyn Rasterizer) -> ExportResult<PathBuf> {
        let image = capture_with_stamp(&mut self.scene, &self.stamp, rasterizer)?;
        let bytes = encode_png(&image)?;
        let path = write_export(&self.dir, &self.file_name(), &bytes)?;
        tracing::info!("Exported board to {}", path.display());
        Ok(path)
    }
}
