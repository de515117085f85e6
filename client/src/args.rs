use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Pvp,
    Bot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Bot => GameMode::PlayerVsBot,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Random,
    Optimal,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Random => Difficulty::Random,
            DifficultyArg::Optimal => Difficulty::Optimal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", version, about = "Terminal tic-tac-toe")]
pub struct Args {
    /// Play against another human or against the bot.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Seed for the random bot; a random seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Make the optimal bot prefer quicker wins.
    #[arg(long)]
    pub depth_discount: bool,

    #[arg(long)]
    pub bot_delay_ms: Option<u64>,

    /// Config file path. Defaults to a YAML file next to the executable.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    pub save_config: bool,

    #[arg(long)]
    pub use_log_prefix: bool,
}

impl Args {
    /// Command-line flags win over values from the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.tictactoe.mode = mode.into();
        }
        if let Some(difficulty) = self.difficulty {
            config.tictactoe.difficulty = difficulty.into();
        }
        if self.depth_discount {
            config.tictactoe.depth_discount = true;
        }
        if let Some(delay) = self.bot_delay_ms {
            config.tictactoe.bot_delay_ms = delay;
        }
        if self.use_log_prefix {
            config.use_log_prefix = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--mode",
            "pvp",
            "--difficulty",
            "optimal",
            "--bot-delay-ms",
            "0",
            "--depth-discount",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.tictactoe.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.tictactoe.difficulty, Difficulty::Optimal);
        assert_eq!(config.tictactoe.bot_delay_ms, 0);
        assert!(config.tictactoe.depth_discount);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = Args::parse_from(["tictactoe_client"]);
        let mut config = Config::default();
        config.tictactoe.difficulty = Difficulty::Optimal;
        args.apply_to(&mut config);
        assert_eq!(config.tictactoe.difficulty, Difficulty::Optimal);
        assert_eq!(config.tictactoe.mode, GameMode::PlayerVsBot);
    }
}
