use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Percent chance, 0..=100, that the computer searches for the best move
/// instead of picking an empty cell at random.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Accuracy(u8);

impl Accuracy {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, GameError> {
        if value > Self::MAX {
            return Err(GameError::InvalidAccuracy { value });
        }
        Ok(Self(value as u8))
    }

    pub fn percent(&self) -> u32 {
        self.0 as u32
    }
}

impl From<Difficulty> for Accuracy {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.accuracy()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Unbeatable,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Unbeatable,
    ];

    pub fn accuracy(&self) -> Accuracy {
        match self {
            Difficulty::Easy => Accuracy(0),
            Difficulty::Medium => Accuracy(50),
            Difficulty::Hard => Accuracy(90),
            Difficulty::Unbeatable => Accuracy(100),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unbeatable => "unbeatable",
        }
    }

    pub fn from_name(name: &str) -> Option<Difficulty> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
    }
}
