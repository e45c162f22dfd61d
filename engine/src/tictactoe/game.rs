use super::board::Board;
use super::bot_controller::{MoveSource, choose_computer_move_traced};
use super::difficulty::Accuracy;
use super::error::GameError;
use super::types::{Mark, Outcome, Players, WinningLine};
use super::win_detector::{check_win_with_line, has_win, is_draw};
use crate::config::GameConfig;
use crate::log;
use crate::session_rng::SessionRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub human_move: usize,
    pub computer_move: Option<usize>,
    pub computer_source: Option<MoveSource>,
    pub outcome: Outcome,
}

/// One human-versus-computer session: a single board that is cleared between
/// games, and the two players whose marks persist across them.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: Players,
    accuracy: Accuracy,
    rng: SessionRng,
}

impl Game {
    /// Starts the first game right away, so a human playing O finds the
    /// computer's opening move already on the board.
    pub fn new(human_mark: Mark, accuracy: Accuracy, rng: SessionRng) -> Result<Self, GameError> {
        let players = Players::new(human_mark)?;
        let mut game = Self {
            board: Board::new(),
            players,
            accuracy,
            rng,
        };
        game.reset_game()?;
        Ok(game)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let accuracy = Accuracy::new(config.accuracy)?;
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::new(config.human_mark, accuracy, rng)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Used by `reset_game` and `play_round`. Takes effect on the next
    /// computer move; callers normally reset afterwards.
    pub fn set_accuracy(&mut self, accuracy: Accuracy) {
        self.accuracy = accuracy;
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(line) = check_win_with_line(&self.board) {
            return Outcome::Win(line.mark);
        }
        if is_draw(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.apply_move(index, self.players.human_mark())
    }

    pub fn apply_ai_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.apply_move(index, self.players.computer_mark())
    }

    pub fn compute_ai_move(&mut self, accuracy: Accuracy) -> Result<usize, GameError> {
        self.compute_ai_move_traced(accuracy).map(|(index, _)| index)
    }

    pub fn reset_game(&mut self) -> Result<Option<usize>, GameError> {
        self.board.clear();
        log!(
            "New game: human {} vs computer {} at accuracy {}",
            self.players.human_mark(),
            self.players.computer_mark(),
            self.accuracy.percent()
        );

        if self.players.human_mark() != Mark::O {
            return Ok(None);
        }

        let index = self.compute_ai_move(self.accuracy)?;
        self.apply_ai_move(index)?;
        Ok(Some(index))
    }

    pub fn set_human_mark(&mut self, mark: Mark) -> Result<(), GameError> {
        self.players.set_human_mark(mark)?;
        log!("Human now plays {}", mark);
        Ok(())
    }

    /// Human move followed, if the game is still open, by the computer's
    /// reply at the configured accuracy.
    pub fn play_round(&mut self, index: usize) -> Result<RoundReport, GameError> {
        let outcome = self.apply_human_move(index)?;
        if outcome.is_terminal() {
            return Ok(RoundReport {
                human_move: index,
                computer_move: None,
                computer_source: None,
                outcome,
            });
        }

        let (computer_move, source) = self.compute_ai_move_traced(self.accuracy)?;
        let outcome = self.apply_ai_move(computer_move)?;
        Ok(RoundReport {
            human_move: index,
            computer_move: Some(computer_move),
            computer_source: Some(source),
            outcome,
        })
    }

    fn compute_ai_move_traced(&mut self, accuracy: Accuracy) -> Result<(usize, MoveSource), GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }
        choose_computer_move_traced(&mut self.board, &self.players, accuracy, &mut self.rng)
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Outcome, GameError> {
        if let Err(err) = self.check_move(index) {
            log!("Rejected {} at cell {}: {}", mark, index, err);
            return Err(err);
        }

        self.board.set(index, mark)?;

        let outcome = if has_win(&self.board) {
            Outcome::Win(mark)
        } else if is_draw(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };

        if outcome.is_terminal() {
            log!("Game over: {:?} after {} played cell {}", outcome, mark, index);
        }
        Ok(outcome)
    }

    fn check_move(&self, index: usize) -> Result<(), GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }
        match self.board.get(index)? {
            Mark::Empty => Ok(()),
            mark => Err(GameError::CellOccupied { index, mark }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::difficulty::Difficulty;
    use crate::tictactoe::types::Position;

    fn create_game(human_mark: Mark, accuracy: u32) -> Game {
        Game::new(human_mark, Accuracy::new(accuracy).unwrap(), SessionRng::new(42)).unwrap()
    }

    #[test]
    fn test_new_game_with_human_x_starts_empty() {
        let game = create_game(Mark::X, 0);
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.seed(), 42);
    }

    #[test]
    fn test_human_completes_row() {
        let mut game = create_game(Mark::X, 0);
        assert_eq!(game.apply_human_move(0), Ok(Outcome::InProgress));
        assert_eq!(game.apply_ai_move(3), Ok(Outcome::InProgress));
        assert_eq!(game.apply_human_move(1), Ok(Outcome::InProgress));
        assert_eq!(game.apply_ai_move(4), Ok(Outcome::InProgress));

        assert_eq!(game.apply_human_move(2), Ok(Outcome::Win(Mark::X)));
        assert_eq!(game.outcome(), Outcome::Win(Mark::X));

        let line = game.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = create_game(Mark::X, 0);
        let human = [0, 8, 6, 5];
        let computer = [4, 2, 3, 7];
        for (&h, &c) in human.iter().zip(computer.iter()) {
            assert_eq!(game.apply_human_move(h), Ok(Outcome::InProgress));
            assert_eq!(game.apply_ai_move(c), Ok(Outcome::InProgress));
        }
        assert_eq!(game.apply_human_move(1), Ok(Outcome::Draw));
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_effect() {
        let mut game = create_game(Mark::X, 0);
        game.apply_human_move(4).unwrap();
        let before = *game.board();

        assert_eq!(
            game.apply_ai_move(4),
            Err(GameError::CellOccupied { index: 4, mark: Mark::X })
        );
        assert_eq!(
            game.apply_human_move(4),
            Err(GameError::CellOccupied { index: 4, mark: Mark::X })
        );
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let mut game = create_game(Mark::X, 0);
        assert_eq!(game.apply_human_move(9), Err(GameError::IndexOutOfRange { index: 9 }));
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut game = create_game(Mark::X, 0);
        for (h, c) in [(0, 3), (1, 4)] {
            game.apply_human_move(h).unwrap();
            game.apply_ai_move(c).unwrap();
        }
        game.apply_human_move(2).unwrap();

        assert_eq!(game.apply_ai_move(5), Err(GameError::GameOver));
        assert_eq!(game.compute_ai_move(Accuracy::default()), Err(GameError::GameOver));
        assert_eq!(game.board().occupied_count(), 5);
    }

    #[test]
    fn test_reset_after_switching_to_o_preplays_computer_move() {
        let mut game = create_game(Mark::X, 0);
        game.apply_human_move(0).unwrap();
        assert_eq!(game.reset_game(), Ok(None));
        assert_eq!(game.board().occupied_count(), 0);

        game.set_human_mark(Mark::O).unwrap();
        let opening = game.reset_game().unwrap().unwrap();

        assert_eq!(game.board().occupied_count(), 1);
        assert_eq!(game.board().get(opening), Ok(Mark::X));
        assert_eq!(game.players().computer_mark(), Mark::X);
    }

    #[test]
    fn test_set_human_mark_rejects_empty() {
        let mut game = create_game(Mark::X, 0);
        assert_eq!(game.set_human_mark(Mark::Empty), Err(GameError::InvalidMark));
        assert_eq!(game.players().human_mark(), Mark::X);
    }

    #[test]
    fn test_compute_ai_move_leaves_board_untouched() {
        let mut game = create_game(Mark::X, 100);
        game.apply_human_move(4).unwrap();
        let before = *game.board();

        let index = game.compute_ai_move(Difficulty::Unbeatable.accuracy()).unwrap();
        assert_eq!(*game.board(), before);
        assert_eq!(game.board().get(index), Ok(Mark::Empty));
    }

    #[test]
    fn test_play_round_applies_reply() {
        let mut game = create_game(Mark::X, 100);
        let report = game.play_round(0).unwrap();

        assert_eq!(report.human_move, 0);
        assert_eq!(report.computer_source, Some(MoveSource::Search));
        assert_eq!(report.outcome, Outcome::InProgress);
        let reply = report.computer_move.unwrap();
        assert_eq!(game.board().get(reply), Ok(Mark::O));
        assert_eq!(game.board().occupied_count(), 2);
    }

    #[test]
    fn test_unbeatable_game_never_lost() {
        for human_mark in [Mark::X, Mark::O] {
            let mut game = create_game(human_mark, 100);
            while game.outcome() == Outcome::InProgress {
                let index = game.board().empty_indices()[0];
                game.play_round(index).unwrap();
            }
            assert_ne!(game.outcome(), Outcome::Win(human_mark));
        }
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig {
            human_mark: Mark::O,
            accuracy: 100,
            seed: Some(7),
        };
        let game = Game::from_config(&config).unwrap();
        assert_eq!(game.seed(), 7);
        assert_eq!(game.accuracy().percent(), 100);
        assert_eq!(game.board().occupied_count(), 1);

        let config = GameConfig {
            accuracy: 150,
            ..GameConfig::default()
        };
        assert_eq!(
            Game::from_config(&config).unwrap_err(),
            GameError::InvalidAccuracy { value: 150 }
        );
    }

    #[test]
    fn test_set_accuracy_used_on_reset() {
        let mut game = create_game(Mark::O, 0);
        game.set_accuracy(Difficulty::Unbeatable.accuracy());
        let opening = game.reset_game().unwrap();
        // first strictly best opening from an empty board
        assert_eq!(opening, Some(0));
    }
}
