mod board;
mod bot_controller;
mod difficulty;
mod error;
mod game;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, BOARD_SIDE, Board};
pub use bot_controller::{MoveSource, choose_computer_move, choose_computer_move_traced};
pub use difficulty::{Accuracy, Difficulty};
pub use error::GameError;
pub use game::{Game, RoundReport};
pub use minimax::{Score, best_move, minimax};
pub use types::{Mark, Outcome, Player, Players, Position, Turn, WinningLine};
pub use win_detector::{LINES, check_win_with_line, has_win, is_draw};
