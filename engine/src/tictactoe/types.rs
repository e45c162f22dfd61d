use serde::{Deserialize, Serialize};

use super::board::BOARD_SIDE;
use super::error::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whose turn it is at a node of the search. A win found on entry to a node
/// belongs to the side that moved into it, i.e. the opposite of this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    HumanToMove,
    ComputerToMove,
}

impl Turn {
    pub fn next(self) -> Turn {
        match self {
            Turn::HumanToMove => Turn::ComputerToMove,
            Turn::ComputerToMove => Turn::HumanToMove,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_SIDE, index / BOARD_SIDE)
    }

    pub fn to_index(&self) -> usize {
        self.y * BOARD_SIDE + self.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    mark: Mark,
}

impl Player {
    fn new(mark: Mark) -> Self {
        Self { mark }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }
}

/// The human and the computer. Their marks are always complementary; the only
/// way to change them is `set_human_mark`, which reassigns both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    human: Player,
    computer: Player,
}

impl Players {
    pub fn new(human_mark: Mark) -> Result<Self, GameError> {
        let computer_mark = human_mark.opponent().ok_or(GameError::InvalidMark)?;
        Ok(Self {
            human: Player::new(human_mark),
            computer: Player::new(computer_mark),
        })
    }

    pub fn set_human_mark(&mut self, mark: Mark) -> Result<(), GameError> {
        let computer_mark = mark.opponent().ok_or(GameError::InvalidMark)?;
        self.human.set_mark(mark);
        self.computer.set_mark(computer_mark);
        Ok(())
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn human_mark(&self) -> Mark {
        self.human.mark()
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer.mark()
    }

    pub fn mark_for(&self, turn: Turn) -> Mark {
        match turn {
            Turn::HumanToMove => self.human_mark(),
            Turn::ComputerToMove => self.computer_mark(),
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self {
            human: Player::new(Mark::X),
            computer: Player::new(Mark::O),
        }
    }
}
