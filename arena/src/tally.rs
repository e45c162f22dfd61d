use std::fmt;
use xo_engine::{MoveSource, Outcome, Players};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
    pub searched_moves: u32,
    pub random_moves: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome, players: &Players) {
        match outcome {
            Outcome::Win(mark) if mark == players.human_mark() => self.human_wins += 1,
            Outcome::Win(_) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn record_source(&mut self, source: MoveSource) {
        match source {
            MoveSource::Search => self.searched_moves += 1,
            MoveSource::Random => self.random_moves += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: human won {}, computer won {}, drawn {} ({} searched / {} random computer moves)",
            self.games(),
            self.human_wins,
            self.computer_wins,
            self.draws,
            self.searched_moves,
            self.random_moves
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xo_engine::Mark;

    #[test]
    fn test_record_attributes_wins_by_mark() {
        let mut tally = Tally::default();
        let players = Players::new(Mark::O).unwrap();

        tally.record(Outcome::Win(Mark::O), &players);
        tally.record(Outcome::Win(Mark::X), &players);
        tally.record(Outcome::Win(Mark::X), &players);
        tally.record(Outcome::Draw, &players);
        tally.record(Outcome::InProgress, &players);

        assert_eq!(tally.human_wins, 1);
        assert_eq!(tally.computer_wins, 2);
        assert_eq!(tally.draws, 1);
        assert_eq!(tally.games(), 4);
    }

    #[test]
    fn test_display_summary() {
        let mut tally = Tally::default();
        tally.record(Outcome::Draw, &Players::default());
        tally.record_source(MoveSource::Search);
        tally.record_source(MoveSource::Random);
        tally.record_source(MoveSource::Random);
        assert_eq!(
            tally.to_string(),
            "1 games: human won 0, computer won 0, drawn 1 (1 searched / 2 random computer moves)"
        );
    }
}
