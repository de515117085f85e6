use std::io::Write;
use tictactoe_common::games::tictactoe::{Outcome, ScoreBoard};

/// Notified once each time a game reaches a terminal outcome.
pub trait OutcomeObserver {
    fn on_game_over(&mut self, outcome: Outcome, score: &ScoreBoard);
}

/// Announces results in the terminal; wins ring the bell.
pub struct TerminalFeedback<W: Write> {
    out: W,
    bell: bool,
}

impl<W: Write> TerminalFeedback<W> {
    pub fn new(out: W, bell: bool) -> Self {
        Self { out, bell }
    }
}

impl<W: Write> OutcomeObserver for TerminalFeedback<W> {
    fn on_game_over(&mut self, outcome: Outcome, score: &ScoreBoard) {
        let bell = if self.bell && outcome.winner().is_some() {
            "\x07"
        } else {
            ""
        };
        let _ = writeln!(self.out, "{}*** {} ***", bell, outcome);
        let _ = writeln!(self.out, "{}", score);
        let _ = self.out.flush();
    }
}
