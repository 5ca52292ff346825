//! Grid cursor movement.
//!
//! The visible champions are laid out row-major in a grid whose column count
//! depends on the pane width. Horizontal moves step one tile, vertical moves
//! step one grid row; both wrap around the ends of the list.

/// Direction of a cursor move within the champion grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Computes the next selected index.
///
/// `len` is the number of visible tiles and `columns` the grid width in tiles
/// (treated as 1 when zero). Returns `0` for an empty grid.
///
/// Vertical moves that would leave the grid wrap to the same column on the
/// opposite edge. Moving down into a missing cell of a short final row lands on
/// the last tile; wrapping up lands on the lowest row that has the column.
///
/// # Examples
///
/// ```
/// use draftboard::app::navigation::{step, Direction};
///
/// // 7 tiles in 3 columns:
/// // 0 1 2
/// // 3 4 5
/// // 6
/// assert_eq!(step(2, 7, 3, Direction::Right), 3);
/// assert_eq!(step(1, 7, 3, Direction::Up), 4);
/// assert_eq!(step(5, 7, 3, Direction::Down), 6);
/// assert_eq!(step(6, 7, 3, Direction::Down), 0);
/// ```
#[must_use]
pub fn step(index: usize, len: usize, columns: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }

    let columns = columns.max(1);
    let index = index.min(len - 1);
    let last_row = (len - 1) / columns;
    let column = index % columns;

    match direction {
        Direction::Right => (index + 1) % len,
        Direction::Left => {
            if index == 0 {
                len - 1
            } else {
                index - 1
            }
        }
        Direction::Down => {
            let below = index + columns;
            if below < len {
                below
            } else if index / columns < last_row {
                len - 1
            } else {
                column
            }
        }
        Direction::Up => {
            if index >= columns {
                index - columns
            } else {
                let wrapped = last_row * columns + column;
                if wrapped < len {
                    wrapped
                } else {
                    wrapped - columns
                }
            }
        }
    }
}
