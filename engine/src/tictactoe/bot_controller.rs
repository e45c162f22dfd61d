use super::board::Board;
use super::difficulty::Accuracy;
use super::error::GameError;
use super::minimax::best_move;
use super::types::Players;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Search,
    Random,
}

/// Picks the computer's next cell. The board is only touched by search
/// trials, all of which are retracted before returning.
pub fn choose_computer_move(
    board: &mut Board,
    players: &Players,
    accuracy: Accuracy,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    choose_computer_move_traced(board, players, accuracy, rng).map(|(index, _)| index)
}

pub fn choose_computer_move_traced(
    board: &mut Board,
    players: &Players,
    accuracy: Accuracy,
    rng: &mut SessionRng,
) -> Result<(usize, MoveSource), GameError> {
    let available_moves = board.empty_indices();
    if available_moves.is_empty() {
        return Err(GameError::NoAvailableMoves);
    }

    let sample: u32 = rng.random_range(0..Accuracy::MAX);
    if sample < accuracy.percent() {
        let index = best_move(board, players).ok_or(GameError::NoAvailableMoves)?;
        return Ok((index, MoveSource::Search));
    }

    let index = available_moves[rng.random_range(0..available_moves.len())];
    Ok((index, MoveSource::Random))
}
