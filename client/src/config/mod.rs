mod config;
mod tictactoe_game_config;

pub use config::{Config, get_config_manager};
pub use tictactoe_game_config::TicTacToeGameConfig;
