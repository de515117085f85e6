mod tictactoe_runner;

pub use tictactoe_runner::{RunnerOptions, run_tictactoe_game};
