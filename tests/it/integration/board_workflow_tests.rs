//! Board Workflow Integration Tests

use crate::helpers::{
    TestBoardBuilder, assert_note_count, empty_board, texts_in, visible_index, visible_texts,
};
use kwl_board::board::{Modal, SubmitOutcome};
use kwl_board::error::NoteError;
use kwl_board::notifications::ToastVariant;
use kwl_board::types::{AssessmentMode, Category, NoteColor};

fn toast_message(board: &kwl_board::board::BoardController) -> Option<String> {
    board.toasts().current().map(|t| t.message.clone())
}

#[test]
fn test_new_board_workflow() {
    let board = empty_board();
    assert!(board.notes().is_empty());
    assert_eq!(board.topic_title(), "");
    assert_eq!(board.mode(), AssessmentMode::Pre);
    assert_eq!(board.selected_color(), NoteColor::Yellow);
    assert_eq!(board.editing(), None);
    assert_eq!(board.modal(), None);
    assert!(!board.is_exporting());
}

#[test]
fn test_add_first_note() {
    let mut board = empty_board();
    let note = board.add_note("ecosystems", NoteColor::Yellow).unwrap();

    assert_eq!(note.category, Category::Know);
    assert_eq!(visible_texts(&board), ["ecosystems"]);
    assert_eq!(toast_message(&board).as_deref(), Some("Note added!"));
}

#[test]
fn test_blank_note_rejected_with_toast() {
    let mut board = empty_board();
    let err = board.add_note("   ", NoteColor::Pink).unwrap_err();

    assert_eq!(err, NoteError::EmptyText);
    assert_note_count(&board, 0);
    let toast = board.toasts().current().unwrap();
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.message, "Please enter some text for your note");
}

#[test]
fn test_submit_adds_in_selected_color() {
    let mut board = empty_board();
    assert!(board.select_color(NoteColor::Pink));
    assert!(!board.select_color(NoteColor::Blue));
    assert_eq!(board.selected_color(), NoteColor::Pink);

    let outcome = board.submit("why is the sky blue?").unwrap();
    let SubmitOutcome::Added(note) = outcome else {
        panic!("expected a new note, got {outcome:?}");
    };
    assert_eq!(note.color, NoteColor::Pink);
    assert_eq!(note.category, Category::Want);
}

#[test]
fn test_edit_through_form() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .with_note("B", NoteColor::Pink)
        .build();
    let id = board.notes()[1].id.clone();

    assert_eq!(board.begin_edit(&id).as_deref(), Some("B"));
    assert_eq!(board.editing(), Some(id.as_str()));

    let outcome = board.submit("  Bees  ").unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated { id: id.clone() });
    assert_eq!(board.editing(), None);
    assert_eq!(visible_texts(&board), ["A", "Bees"]);
    assert_eq!(board.notes()[1].color, NoteColor::Pink);
    assert_eq!(toast_message(&board).as_deref(), Some("Note updated!"));
}

#[test]
fn test_blank_edit_keeps_note_and_editing() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .build();
    let id = board.notes()[0].id.clone();
    board.begin_edit(&id);

    assert_eq!(board.submit(" "), Err(NoteError::EmptyText));
    assert_eq!(visible_texts(&board), ["A"]);
    assert_eq!(board.editing(), Some(id.as_str()));
}

#[test]
fn test_edit_unknown_note() {
    let mut board = empty_board();
    assert!(matches!(
        board.edit_note("ghost", "boo"),
        Err(NoteError::NotFound(_))
    ));
    assert_eq!(
        board.toasts().current().map(|t| t.variant),
        Some(ToastVariant::Error)
    );
}

#[test]
fn test_cancel_edit() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .build();
    let id = board.notes()[0].id.clone();
    board.begin_edit(&id);
    board.cancel_edit();
    assert_eq!(board.editing(), None);
    assert_eq!(board.begin_edit("missing"), None);
}

#[test]
fn test_delete_is_idempotent() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .with_note("B", NoteColor::Orange)
        .build();
    let id = board.notes()[0].id.clone();

    board.delete_note(&id);
    assert_note_count(&board, 1);
    board.delete_note(&id);
    assert_note_count(&board, 1);
    assert_eq!(toast_message(&board).as_deref(), Some("Note deleted!"));
}

#[test]
fn test_delete_clears_editing_target() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .build();
    let id = board.notes()[0].id.clone();
    board.begin_edit(&id);
    board.delete_note(&id);
    assert_eq!(board.editing(), None);
}

#[test]
fn test_reorder_moves_within_visible_partition() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .with_note("P", NoteColor::Blue)
        .with_note("B", NoteColor::Yellow)
        .build();

    board.reorder(visible_index(&board, "B"), Some(0));
    assert_eq!(visible_texts(&board), ["B", "A"]);
    assert_eq!(texts_in(&board, AssessmentMode::Post), ["P"]);
}

#[test]
fn test_cancelled_drag_changes_nothing() {
    let mut board = TestBoardBuilder::new()
        .with_note("A", NoteColor::Yellow)
        .with_note("B", NoteColor::Yellow)
        .build();
    let before = board.notes().to_vec();

    board.reorder(1, None);
    board.reorder(1, Some(1));
    assert_eq!(board.notes(), before.as_slice());
}

#[test]
fn test_mode_switch_is_a_view_filter() {
    let mut board = TestBoardBuilder::new()
        .with_note("know", NoteColor::Yellow)
        .with_note("learned", NoteColor::Orange)
        .build();
    let before = board.notes().to_vec();

    board.select_color(NoteColor::Pink);
    board.set_mode(AssessmentMode::Post);
    assert_eq!(board.notes(), before.as_slice());
    assert_eq!(visible_texts(&board), ["learned"]);
    assert_eq!(board.selected_color(), NoteColor::Orange);
    assert_eq!(
        board.available_colors(),
        [NoteColor::Orange, NoteColor::Blue]
    );

    board.set_mode(AssessmentMode::Pre);
    assert_eq!(visible_texts(&board), ["know"]);
    assert_eq!(board.selected_color(), NoteColor::Yellow);
}

#[test]
fn test_mode_switch_ends_editing() {
    let mut board = TestBoardBuilder::new()
        .with_note("know", NoteColor::Yellow)
        .build();
    let id = board.notes()[0].id.clone();
    board.begin_edit(&id);
    board.set_mode(AssessmentMode::Post);
    assert_eq!(board.editing(), None);
}

#[test]
fn test_clear_requires_confirmation() {
    let mut board = TestBoardBuilder::new()
        .with_note("know", NoteColor::Yellow)
        .with_note("want", NoteColor::Pink)
        .with_note("learned", NoteColor::Blue)
        .build();

    // Without an open modal nothing happens
    board.confirm_clear();
    assert_note_count(&board, 3);

    board.request_clear();
    assert_eq!(
        board.modal(),
        Some(Modal::ConfirmClear {
            mode: AssessmentMode::Pre
        })
    );
    board.dismiss_modal();
    assert_note_count(&board, 3);

    board.request_clear();
    board.confirm_clear();
    assert_eq!(board.modal(), None);
    assert_eq!(texts_in(&board, AssessmentMode::Pre), Vec::<String>::new());
    assert_eq!(texts_in(&board, AssessmentMode::Post), ["learned"]);
    assert_eq!(toast_message(&board).as_deref(), Some("Board cleared!"));
}

#[test]
fn test_clear_post_keeps_pre() {
    let mut board = TestBoardBuilder::new()
        .with_note("know", NoteColor::Yellow)
        .with_note("learned", NoteColor::Orange)
        .build();
    board.set_mode(AssessmentMode::Post);
    board.request_clear();
    board.confirm_clear();
    assert_eq!(texts_in(&board, AssessmentMode::Pre), ["know"]);
    assert_note_count(&board, 1);
}

#[test]
fn test_title_change() {
    let mut board = empty_board();
    board.set_topic_title("Photosynthesis");
    assert_eq!(board.topic_title(), "Photosynthesis");
    assert_eq!(board.snapshot().topic_title, "Photosynthesis");
}
