mod board;
mod bot_controller;
mod error;
mod game_state;
mod score_board;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, select_move};
pub use error::TicTacToeError;
pub use game_state::{BOT_MARK, TicTacToeGameState};
pub use score_board::ScoreBoard;
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, CELL_COUNT, CellIndex, Difficulty, GameMode, Mark, Outcome, SearchUtility,
    WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
