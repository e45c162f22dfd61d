pub mod config;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use config::GameConfig;
pub use session_rng::SessionRng;
pub use tictactoe::*;
