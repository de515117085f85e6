use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::TicTacToeError;
use super::settings::TicTacToeSessionSettings;
use super::types::{CellIndex, Difficulty, GameMode, Mark, Outcome, SearchUtility, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// The automated opponent always plays O; the human opens as X.
pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: Outcome,
    last_move: Option<CellIndex>,
    mode: GameMode,
    difficulty: Difficulty,
    utility: SearchUtility,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSessionSettings) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::InProgress,
            last_move: None,
            mode: settings.mode,
            difficulty: settings.difficulty,
            utility: settings.utility(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.status
    }

    pub fn last_move(&self) -> Option<CellIndex> {
        self.last_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn utility(&self) -> SearchUtility {
        self.utility
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot
            && self.status == Outcome::InProgress
            && self.current_mark == BOT_MARK
    }

    /// Human move. Rejected while the bot is to move.
    pub fn place_mark(&mut self, index: CellIndex) -> Result<Outcome, TicTacToeError> {
        if self.is_bot_turn() {
            return Err(TicTacToeError::InvalidPlacement("Not your turn".to_string()));
        }
        self.apply_mark(index)
    }

    /// Asks the move selector for the bot's move and plays it.
    pub fn apply_bot_move(&mut self, rng: &mut SessionRng) -> Result<CellIndex, TicTacToeError> {
        if !self.is_bot_turn() {
            return Err(TicTacToeError::InvalidState("Not the bot's turn".to_string()));
        }
        let index = calculate_move(self.difficulty, BotInput::from_game_state(self), rng)?;
        self.apply_mark(index)?;
        Ok(index)
    }

    fn apply_mark(&mut self, index: CellIndex) -> Result<Outcome, TicTacToeError> {
        if self.status != Outcome::InProgress {
            return Err(TicTacToeError::InvalidPlacement(
                "Game is already over".to_string(),
            ));
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = Outcome::InProgress;
        self.last_move = None;
    }

    /// Switching mode starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}
