use clap::ValueEnum;
use xo_engine::{Board, Mark, Players, Score, SessionRng, Turn, minimax};

/// Scripted player occupying the human's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StandIn {
    Random,
    Perfect,
}

impl StandIn {
    pub fn pick(&self, board: &Board, players: &Players, rng: &mut SessionRng) -> Option<usize> {
        let available_moves = board.empty_indices();
        if available_moves.is_empty() {
            return None;
        }

        match self {
            StandIn::Random => Some(available_moves[rng.random_range(0..available_moves.len())]),
            StandIn::Perfect => pick_perfect(board, players, &available_moves),
        }
    }
}

/// The human's best cell is the one that leaves the computer the lowest score.
fn pick_perfect(board: &Board, players: &Players, available_moves: &[usize]) -> Option<usize> {
    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = Score::MAX;

    for &index in available_moves {
        scratch.set(index, players.human_mark()).ok()?;
        let score = minimax(&mut scratch, Turn::ComputerToMove, players);
        scratch.set(index, Mark::Empty).ok()?;

        if score < best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}
