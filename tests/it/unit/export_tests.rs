//! Unit tests for board export.

use kwl_board::error::ExportError;
use kwl_board::export::{
    BoardRasterizer, BoardScene, ExportJob, FontSet, Rasterizer, date_stamp, encode_png,
    export_file_name, write_export,
};
use kwl_board::types::{AssessmentMode, Note, NoteColor};
use std::path::Path;
use tempfile::TempDir;

fn notes() -> Vec<Note> {
    vec![
        Note::new("sunlight", NoteColor::Yellow),
        Note::new("glucose", NoteColor::Orange),
        Note::new("how do roots help?", NoteColor::Pink),
    ]
}

fn rasterizer() -> BoardRasterizer {
    BoardRasterizer::new(FontSet::embedded().unwrap())
}

fn render(title: &str, text: &str) -> image::RgbaImage {
    let notes = [Note::new(text, NoteColor::Yellow)];
    let scene = BoardScene::capture(title, AssessmentMode::Pre, &notes);
    rasterizer().rasterize(&scene).unwrap()
}

#[test]
fn test_file_name_examples() {
    assert_eq!(
        export_file_name("Photosynthesis!!"),
        "Photosynthesis__KWL_Board.png"
    );
    assert_eq!(export_file_name("Día 1"), "D_a_1_KWL_Board.png");
    assert_eq!(export_file_name(""), "KWL_Board.png");
    assert_eq!(export_file_name("   "), "KWL_Board.png");
    // Surrounding spaces are sanitized like any other character
    assert_eq!(export_file_name(" Rocks "), "_Rocks__KWL_Board.png");
}

#[test]
fn test_scene_holds_only_visible_notes() {
    let notes = notes();
    let pre = BoardScene::capture("  Plants ", AssessmentMode::Pre, &notes);
    assert_eq!(pre.title, "  Plants ");
    let texts: Vec<&str> = pre.notes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, ["sunlight", "how do roots help?"]);
    assert_eq!(pre.stamp, None);

    let post = BoardScene::capture("Plants", AssessmentMode::Post, &notes);
    assert_eq!(post.notes.len(), 1);
}

#[test]
fn test_rasterized_png_decodes() {
    let scene = BoardScene::capture("Plants", AssessmentMode::Pre, &notes());
    let image = rasterizer().rasterize(&scene).unwrap();
    let bytes = encode_png(&image).unwrap();

    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), image.width());
    assert_eq!(decoded.height(), image.height());
}

#[test]
fn test_distinct_texts_rasterize_differently() {
    assert_ne!(render("Plants", "abc"), render("Plants", "ABC"));
    assert_ne!(render("Plants", "Día"), render("Plants", "Dia"));
    assert_ne!(render("Día", "roots"), render("Dia", "roots"));
    assert_eq!(render("Plants", "abc"), render("Plants", "abc"));
}

#[test]
fn test_job_writes_named_file() {
    let dir = TempDir::new().unwrap();
    let scene = BoardScene::capture("Photosynthesis!!", AssessmentMode::Pre, &notes());
    let job = ExportJob::new(scene, "Exported: March 7, 2026", dir.path());
    assert_eq!(job.file_name(), "Photosynthesis__KWL_Board.png");

    let path = job.run(&rasterizer()).unwrap();
    assert_eq!(path, dir.path().join("Photosynthesis__KWL_Board.png"));
    let decoded = image::open(&path).unwrap();
    assert!(decoded.width() > 0);
}

#[test]
fn test_write_export_requires_destination() {
    let err = write_export(Path::new(""), "x.png", b"data").unwrap_err();
    assert!(matches!(err, ExportError::NoDestination));
}

#[test]
fn test_write_export_overwrites() {
    let dir = TempDir::new().unwrap();
    write_export(dir.path(), "b.png", b"first").unwrap();
    let path = write_export(dir.path(), "b.png", b"second").unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"second");
}

#[test]
fn test_date_stamp_pads_nothing() {
    let date = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    assert_eq!(date_stamp(date), "Exported: October 19, 2026");
}
