//! End-to-end scenarios for the history store.

use rewind_core::rules::{apply_move, is_draw, status, winning_line};
use rewind_core::{GameStatus, GameView, HistoryStore, Mark, MoveError, Position, Square};

fn play_all(store: &mut HistoryStore, cells: &[usize]) {
    for &cell in cells {
        store.play(cell).unwrap();
    }
}

#[test]
fn test_diagonal_win() {
    // X: 0, 4, 8  O: 1, 2
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 1, 4, 2, 8]);

    let board = store.current_board();
    let expected: Vec<Square> = "XOO_X___X"
        .chars()
        .map(|c| match c {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            _ => Square::Empty,
        })
        .collect();
    assert_eq!(board.squares().as_slice(), expected.as_slice());

    match store.status() {
        GameStatus::Won(line) => {
            assert_eq!(line.mark, Mark::X);
            assert_eq!(line.indices(), [0, 4, 8]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
}

#[test]
fn test_top_row_win() {
    // X: 0, 1, 2  O: 3, 4
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 3, 1, 4, 2]);

    let line = winning_line(store.current_board()).unwrap();
    assert_eq!(line.mark, Mark::X);
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_draw() {
    // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert!(is_draw(store.current_board()));
    assert_eq!(store.status(), GameStatus::Draw);
    assert_eq!(store.next_mark(), None);
    assert_eq!(store.play(0), Err(MoveError::GameOver));
}

#[test]
fn test_jump_then_play_truncates_future() {
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 1, 2, 3, 4]);
    assert_eq!(store.len(), 6);
    let old_future = store.boards()[3..].to_vec();

    store.jump_to(2).unwrap();
    store.play(5).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.cursor(), 3);
    assert!(!old_future.contains(store.current_board()));
    assert!(store.jump_to(4).is_err());
}

#[test]
fn test_play_on_terminal_or_occupied_leaves_store_unchanged() {
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 3, 1, 4, 2]);
    let boards = store.boards().to_vec();

    assert_eq!(store.play(8), Err(MoveError::GameOver));
    assert_eq!(store.boards(), boards.as_slice());
    assert_eq!(store.cursor(), 5);

    store.jump_to(4).unwrap();
    assert_eq!(store.play(3), Err(MoveError::SquareOccupied(Position::MiddleLeft)));
    assert_eq!(store.boards(), boards.as_slice());
    assert_eq!(store.cursor(), 4);
}

#[test]
fn test_move_locations_replay_history() {
    let mut store = HistoryStore::new();
    play_all(&mut store, &[4, 0, 8, 2, 1, 7]);

    assert_eq!(store.move_location(0), None);
    for m in 1..store.len() {
        let (pos, mark) = store.move_at(m).unwrap();
        let location = store.move_location(m).unwrap();
        assert_eq!(location, pos.location());

        // X plays moves 1, 3, 5; O plays 2, 4, 6.
        let expected = if m % 2 == 1 { Mark::X } else { Mark::O };
        assert_eq!(mark, expected);

        let replayed = apply_move(&store.boards()[m - 1], pos, mark).unwrap();
        assert_eq!(&replayed, &store.boards()[m]);
    }
}

#[test]
fn test_status_is_recomputed_from_cursor() {
    let mut store = HistoryStore::new();
    play_all(&mut store, &[0, 3, 1, 4, 2]);
    assert!(store.status().is_terminal());

    store.jump_to(4).unwrap();
    assert_eq!(store.status(), GameStatus::InProgress(Mark::X));
    assert_eq!(status(store.current_board()), store.status());

    store.jump_to(5).unwrap();
    assert!(store.status().is_terminal());
}

#[test]
fn test_view_serializes_for_renderers() {
    let mut store = HistoryStore::new();
    play_all(&mut store, &[4, 0]);
    store.toggle_sort();

    let view = store.view();
    let json = serde_json::to_string(&view).unwrap();
    let back: GameView = serde_json::from_str(&json).unwrap();

    assert_eq!(back, view);
    assert!(json.contains("\"sort_order\":\"descending\""));
    assert_eq!(back.moves.first().map(|m| m.index), Some(2));
}
