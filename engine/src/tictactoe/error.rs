use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IndexOutOfRange { index: usize },
    CellOccupied { index: usize, mark: Mark },
    InvalidAccuracy { value: u32 },
    InvalidMark,
    GameOver,
    NoAvailableMoves,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IndexOutOfRange { index } => {
                write!(f, "Cell index {} is out of range 0..=8", index)
            }
            GameError::CellOccupied { index, mark } => {
                write!(f, "Cell {} is already marked with {}", index, mark)
            }
            GameError::InvalidAccuracy { value } => {
                write!(f, "Accuracy {} is outside 0..=100", value)
            }
            GameError::InvalidMark => write!(f, "A player mark must be X or O"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NoAvailableMoves => write!(f, "No empty cells left to play"),
        }
    }
}

impl std::error::Error for GameError {}
