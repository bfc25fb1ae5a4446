//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_core::Position;

/// Moves the board cursor one cell with the arrow keys.
///
/// The cursor stops at the board edge; other keys leave it in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
