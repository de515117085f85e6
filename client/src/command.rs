use tictactoe_common::games::tictactoe::{CELL_COUNT, CellIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(CellIndex),
    Reset,
    ToggleMode,
    ToggleDifficulty,
    ShowScore,
    Help,
    Quit,
}

pub const HELP_TEXT: &str =
    "Commands: 1-9 place a mark, r play again, m toggle mode, d toggle difficulty, s score, h help, q quit";

/// Cells are numbered 1-9 for players, 0-8 internally.
pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(PlayerCommand::Reset),
        "m" | "mode" => Ok(PlayerCommand::ToggleMode),
        "d" | "difficulty" => Ok(PlayerCommand::ToggleDifficulty),
        "s" | "score" => Ok(PlayerCommand::ShowScore),
        "h" | "help" | "?" => Ok(PlayerCommand::Help),
        "q" | "quit" | "exit" => Ok(PlayerCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(PlayerCommand::Place(cell - 1)),
            Ok(cell) => Err(format!("Cell {} is out of range, use 1-{}", cell, CELL_COUNT)),
            Err(_) => Err(format!("Unknown command: {:?}", trimmed)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Ok(PlayerCommand::Place(0)));
        assert_eq!(parse_command(" 9\n"), Ok(PlayerCommand::Place(8)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_letter_commands() {
        assert_eq!(parse_command("R"), Ok(PlayerCommand::Reset));
        assert_eq!(parse_command("m"), Ok(PlayerCommand::ToggleMode));
        assert_eq!(parse_command("d"), Ok(PlayerCommand::ToggleDifficulty));
        assert_eq!(parse_command("score"), Ok(PlayerCommand::ShowScore));
        assert_eq!(parse_command("q"), Ok(PlayerCommand::Quit));
        assert!(parse_command("xyz").is_err());
    }
}
