use super::board::Board;
use super::types::{Mark, Players, Turn};
use super::win_detector::{has_win, is_draw};

pub type Score = i32;

pub const COMPUTER_WIN: Score = 1;
pub const HUMAN_WIN: Score = -1;
pub const DRAW: Score = 0;

/// Game-theoretic value of `board` for the computer, with `turn` to move.
///
/// A line found on entry was completed by the previous mover, so the sign
/// follows the turn that *would* come next: human to move means the computer
/// just won. The board is restored before returning.
pub fn minimax(board: &mut Board, turn: Turn, players: &Players) -> Score {
    search(board, turn, players, Score::MIN, Score::MAX)
}

/// Index the computer should play for perfect play, scanning empty cells in
/// ascending order and keeping the first strictly best score.
pub fn best_move(board: &mut Board, players: &Players) -> Option<usize> {
    let computer_mark = players.computer_mark();

    let mut best_move = None;
    let mut best_score = Score::MIN;

    for index in board.empty_indices() {
        board.place(index, computer_mark);
        let score = minimax(board, Turn::HumanToMove, players);
        board.place(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
        if best_score == COMPUTER_WIN {
            break;
        }
    }

    best_move
}

fn search(board: &mut Board, turn: Turn, players: &Players, mut alpha: Score, mut beta: Score) -> Score {
    if has_win(board) {
        return match turn {
            Turn::HumanToMove => COMPUTER_WIN,
            Turn::ComputerToMove => HUMAN_WIN,
        };
    }

    if is_draw(board) {
        return DRAW;
    }

    let mark = players.mark_for(turn);

    match turn {
        Turn::ComputerToMove => {
            let mut max_eval = Score::MIN;
            for index in board.empty_indices() {
                board.place(index, mark);
                let eval = search(board, turn.next(), players, alpha, beta);
                board.place(index, Mark::Empty);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        }
        Turn::HumanToMove => {
            let mut min_eval = Score::MAX;
            for index in board.empty_indices() {
                board.place(index, mark);
                let eval = search(board, turn.next(), players, alpha, beta);
                board.place(index, Mark::Empty);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}
