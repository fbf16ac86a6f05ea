//! Snapshot tests using the insta crate.
//!
//! These pin the persisted record format. Saved boards from earlier runs
//! must keep loading, so any change here is a migration.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use kwl_board::storage::BoardSnapshot;
use kwl_board::types::{AssessmentMode, Category, Note, NoteColor};

fn note(id: &str, text: &str, color: NoteColor) -> Note {
    Note {
        id: id.to_string(),
        text: text.to_string(),
        color,
        category: color.category(),
    }
}

// ============================================================================
// Record Format
// ============================================================================

#[test]
fn snapshot_board_record() {
    let snapshot = BoardSnapshot {
        topic_title: "Water Cycle".to_string(),
        notes: vec![
            note("n-1", "rain falls", NoteColor::Yellow),
            note("n-2", "where do clouds go?", NoteColor::Pink),
            note("n-3", "evaporation", NoteColor::Blue),
        ],
    };

    insta::assert_json_snapshot!(snapshot, @r#"
    {
      "topicTitle": "Water Cycle",
      "notes": [
        {
          "id": "n-1",
          "text": "rain falls",
          "color": "yellow",
          "category": "know"
        },
        {
          "id": "n-2",
          "text": "where do clouds go?",
          "color": "pink",
          "category": "want"
        },
        {
          "id": "n-3",
          "text": "evaporation",
          "color": "blue",
          "category": "learned"
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_orange_note() {
    insta::assert_json_snapshot!(note("n-9", "condensation", NoteColor::Orange), @r#"
    {
      "id": "n-9",
      "text": "condensation",
      "color": "orange",
      "category": "learned"
    }
    "#);
}

// ============================================================================
// Enum Encodings
// ============================================================================

#[test]
fn test_enum_wire_names() {
    assert_eq!(serde_json::to_string(&Category::Want).unwrap(), "\"want\"");
    assert_eq!(
        serde_json::to_string(&AssessmentMode::Post).unwrap(),
        "\"post\""
    );
    let color: NoteColor = serde_json::from_str("\"pink\"").unwrap();
    assert_eq!(color, NoteColor::Pink);
}

#[test]
fn test_record_missing_fields_default() {
    let snapshot: BoardSnapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, BoardSnapshot::default());

    let snapshot: BoardSnapshot = serde_json::from_str(r#"{"topicTitle":"Soil"}"#).unwrap();
    assert_eq!(snapshot.topic_title, "Soil");
    assert!(snapshot.notes.is_empty());
}
