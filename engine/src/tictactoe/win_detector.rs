use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Rows, then columns, then the main and anti diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_owner(cells: &[Mark], line: &[usize; 3]) -> Option<Mark> {
    let mark = cells[line[0]];
    if mark == Mark::Empty {
        return None;
    }
    if line.iter().all(|&index| cells[index] == mark) {
        Some(mark)
    } else {
        None
    }
}

pub fn has_win(board: &Board) -> bool {
    let cells = board.cells();
    LINES.iter().any(|line| line_owner(cells, line).is_some())
}

/// A full board that also holds a line is a win, never a draw.
pub fn is_draw(board: &Board) -> bool {
    !has_win(board) && board.empty_indices().is_empty()
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|line| {
        line_owner(cells, line).map(|mark| {
            WinningLine::new(
                mark,
                Position::from_index(line[0]),
                Position::from_index(line[2]),
            )
        })
    })
}
