use super::types::{Mark, Outcome};

/// Per-session tallies of finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win(Mark::Empty) | Outcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score - X: {} | O: {} | Draw: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_terminal_outcomes() {
        let mut score = ScoreBoard::default();
        score.record(Outcome::Win(Mark::X));
        score.record(Outcome::Win(Mark::O));
        score.record(Outcome::Win(Mark::O));
        score.record(Outcome::Draw);
        score.record(Outcome::InProgress);

        assert_eq!(
            score,
            ScoreBoard {
                x_wins: 1,
                o_wins: 2,
                draws: 1
            }
        );
        assert_eq!(score.games_played(), 4);
        assert_eq!(score.to_string(), "Score - X: 1 | O: 2 | Draw: 1");
    }
}
