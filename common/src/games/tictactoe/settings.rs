use serde::{Deserialize, Serialize};

use super::types::{Difficulty, GameMode, SearchUtility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Score quicker wins higher in the optimal search.
    #[serde(default)]
    pub depth_discount: bool,
}

impl TicTacToeSessionSettings {
    pub fn utility(&self) -> SearchUtility {
        if self.depth_discount {
            SearchUtility::DepthDiscounted
        } else {
            SearchUtility::Flat
        }
    }
}
