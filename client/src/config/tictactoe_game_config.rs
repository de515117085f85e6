use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeSessionSettings};

pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeGameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub depth_discount: bool,
    /// Pause before the bot answers, in milliseconds.
    pub bot_delay_ms: u64,
}

impl TicTacToeGameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode,
            difficulty: self.difficulty,
            depth_discount: self.depth_discount,
        }
    }
}

impl Validate for TicTacToeGameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeGameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsBot,
            difficulty: Difficulty::Random,
            depth_discount: false,
            bot_delay_ms: 500,
        }
    }
}
