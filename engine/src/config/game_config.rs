use serde::{Deserialize, Serialize};

use super::Validate;
use crate::tictactoe::{Accuracy, Difficulty, Mark};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub human_mark: Mark,
    pub accuracy: u32,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            accuracy: difficulty.accuracy().percent(),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            accuracy: Difficulty::Easy.accuracy().percent(),
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Accuracy::new(self.accuracy).map_err(|e| e.to_string())?;
        Ok(())
    }
}
