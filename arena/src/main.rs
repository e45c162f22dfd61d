mod stand_in;
mod tally;

use clap::Parser;
use std::path::PathBuf;
use xo_engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use xo_engine::{Difficulty, Game, GameConfig, GameError, Mark, Outcome, SessionRng, log, logger};

use stand_in::StandIn;
use tally::Tally;

#[derive(Parser)]
#[command(name = "xo_arena", about = "Plays the tic-tac-toe engine against a scripted human")]
struct Args {
    /// YAML game config; a missing file falls back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 100)]
    games: u32,

    /// easy, medium, hard or unbeatable
    #[arg(long, value_parser = parse_difficulty, conflicts_with = "accuracy")]
    difficulty: Option<Difficulty>,

    /// Percent chance of a searched move, 0-100
    #[arg(long)]
    accuracy: Option<u32>,

    /// Mark of the scripted human, x or o
    #[arg(long, value_parser = parse_mark)]
    human_mark: Option<Mark>,

    #[arg(long, value_enum, default_value_t = StandIn::Random)]
    stand_in: StandIn,

    /// Swap sides after every game
    #[arg(long)]
    alternate_sides: bool,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(value).ok_or_else(|| format!("Unknown difficulty: {}", value))
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    match value {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        _ => Err(format!("Mark must be x or o, got {}", value)),
    }
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let manager: ConfigManager<FileContentConfigProvider, GameConfig> =
                ConfigManager::from_yaml_file(path);
            manager.get_config()?
        }
        None => GameConfig::default(),
    };

    if let Some(difficulty) = args.difficulty {
        config.accuracy = difficulty.accuracy().percent();
    }
    if let Some(accuracy) = args.accuracy {
        config.accuracy = accuracy;
    }
    if let Some(mark) = args.human_mark {
        config.human_mark = mark;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn play_game(
    game: &mut Game,
    stand_in: StandIn,
    rng: &mut SessionRng,
    tally: &mut Tally,
) -> Result<Outcome, GameError> {
    while game.outcome() == Outcome::InProgress {
        let index = stand_in
            .pick(game.board(), game.players(), rng)
            .ok_or(GameError::NoAvailableMoves)?;
        let report = game.play_round(index)?;
        if let Some(source) = report.computer_source {
            tally.record_source(source);
        }
    }
    Ok(game.outcome())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let mut game = Game::from_config(&config)?;
    let mut stand_in_rng = SessionRng::new(game.seed().wrapping_add(1));

    log!(
        "Playing {} games, seed {}, {:?} stand-in",
        args.games,
        game.seed(),
        args.stand_in
    );

    let mut tally = Tally::default();
    for round in 0..args.games {
        if round > 0 {
            if args.alternate_sides {
                let next = game
                    .players()
                    .human_mark()
                    .opponent()
                    .ok_or(GameError::InvalidMark)?;
                game.set_human_mark(next)?;
            }
            game.reset_game()?;
        }

        let outcome = play_game(&mut game, args.stand_in, &mut stand_in_rng, &mut tally)?;
        tally.record(outcome, game.players());

        let cells: String = game.board().cells().iter().map(Mark::symbol).collect();
        log!("Game {}: {:?} [{}]", round + 1, outcome, cells);
    }

    log!("{}", tally);

    Ok(())
}
