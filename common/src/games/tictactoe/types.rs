use serde::{Deserialize, Serialize};

/// Index of a cell on the 3x3 board, row-major, `0..9`.
pub type CellIndex = usize;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Random,
    Optimal,
}

impl Difficulty {
    pub fn toggled(&self) -> Self {
        match self {
            Difficulty::Random => Difficulty::Optimal,
            Difficulty::Optimal => Difficulty::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    #[default]
    PlayerVsBot,
}

impl GameMode {
    pub fn toggled(&self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsBot,
            GameMode::PlayerVsBot => GameMode::PlayerVsPlayer,
        }
    }
}

/// How terminal positions are scored by the optimal search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchUtility {
    /// Win +10, loss -10, draw 0 regardless of how deep the result is.
    #[default]
    Flat,
    /// Win `10 - depth`, loss `depth - 10`: prefers quick wins and slow losses.
    DepthDiscounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [CellIndex; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [CellIndex; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }
}
