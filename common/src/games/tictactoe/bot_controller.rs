use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::error::TicTacToeError;
use super::game_state::TicTacToeGameState;
use super::types::{CELL_COUNT, CellIndex, Difficulty, Mark, Outcome, SearchUtility};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
    pub utility: SearchUtility,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
            utility: SearchUtility::Flat,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
            utility: state.utility(),
        }
    }
}

/// Picks the automated opponent's move, playing O.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<CellIndex, TicTacToeError> {
    calculate_move(difficulty, BotInput::new(*board, Mark::O), rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<CellIndex, TicTacToeError> {
    validate_input(&input)?;
    match difficulty {
        Difficulty::Random => calculate_random_move(&input, rng),
        Difficulty::Optimal => calculate_minimax_move(&input),
    }
}

fn validate_input(input: &BotInput) -> Result<(), TicTacToeError> {
    if input.current_mark == Mark::Empty {
        return Err(TicTacToeError::InvalidState(
            "Bot must play X or O".to_string(),
        ));
    }
    match evaluate(&input.board) {
        Outcome::InProgress => Ok(()),
        outcome => Err(TicTacToeError::InvalidState(format!(
            "Game is already over: {}",
            outcome
        ))),
    }
}

fn calculate_random_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<CellIndex, TicTacToeError> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return Err(TicTacToeError::InvalidState("No empty cells".to_string()));
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

struct SearchContext {
    perspective: Mark,
    opponent: Mark,
    utility: SearchUtility,
}

impl SearchContext {
    fn terminal_score(&self, outcome: Outcome, depth: usize) -> Option<i32> {
        let discount = match self.utility {
            SearchUtility::Flat => 0,
            SearchUtility::DepthDiscounted => depth as i32,
        };
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Win(mark) if mark == self.perspective => Some(WIN_SCORE - discount),
            Outcome::Win(_) => Some(-WIN_SCORE + discount),
        }
    }
}

/// Exhaustive minimax from `input.current_mark`'s point of view. Ties go to the
/// lowest index.
pub fn calculate_minimax_move(input: &BotInput) -> Result<CellIndex, TicTacToeError> {
    let context = SearchContext {
        perspective: input.current_mark,
        opponent: input
            .current_mark
            .opponent()
            .ok_or_else(|| TicTacToeError::InvalidState("Bot must play X or O".to_string()))?,
        utility: input.utility,
    };

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&input.board) {
        let next = input.board.with_mark(index, context.perspective);
        let score = minimax(&next, 0, false, &context);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or_else(|| TicTacToeError::InvalidState("No empty cells".to_string()))
}

fn minimax(board: &Board, depth: usize, is_maximizing: bool, context: &SearchContext) -> i32 {
    if let Some(score) = context.terminal_score(evaluate(board), depth) {
        return score;
    }

    let mark = if is_maximizing {
        context.perspective
    } else {
        context.opponent
    };

    let scores = (0..CELL_COUNT)
        .filter(|&index| board.cells()[index] == Mark::Empty)
        .map(|index| minimax(&board.with_mark(index, mark), depth + 1, !is_maximizing, context));

    // A non-terminal board always has an empty cell, so the fold sees at least one score.
    if is_maximizing {
        scores.fold(i32::MIN, i32::max)
    } else {
        scores.fold(i32::MAX, i32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    fn optimal(board: Board, mark: Mark) -> CellIndex {
        calculate_move(
            Difficulty::Optimal,
            BotInput::new(board, mark),
            &mut SessionRng::new(0),
        )
        .unwrap()
    }

    #[test]
    fn test_optimal_blocks_when_both_sides_threaten() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let mut rng = SessionRng::new(1);
        assert_eq!(select_move(&board, Difficulty::Optimal, &mut rng), Ok(2));
    }

    #[test]
    fn test_optimal_takes_immediate_win() {
        let board = Board::from_cells([O, O, E, X, X, E, E, E, E]);
        let mut rng = SessionRng::new(1);
        assert_eq!(select_move(&board, Difficulty::Optimal, &mut rng), Ok(2));
    }

    #[test]
    fn test_optimal_blocks_single_threat() {
        let board = Board::from_cells([X, E, O, E, X, E, E, E, E]);
        assert_eq!(optimal(board, O), 8);
    }

    #[test]
    fn test_depth_discount_prefers_fastest_win() {
        let board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        let input = BotInput {
            board,
            current_mark: O,
            utility: SearchUtility::DepthDiscounted,
        };
        let result = calculate_move(Difficulty::Optimal, input, &mut SessionRng::new(0));
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn test_optimal_from_empty_board_is_deterministic() {
        let board = Board::new();
        let mut rng = SessionRng::new(7);
        let first = select_move(&board, Difficulty::Optimal, &mut rng).unwrap();
        for _ in 0..2 {
            assert_eq!(select_move(&board, Difficulty::Optimal, &mut rng), Ok(first));
        }
        // Every opening draws under perfect play, so the first index wins the tie.
        assert_eq!(first, 0);
    }

    #[test]
    fn test_perspective_x_wins_when_possible() {
        let board = Board::from_cells([X, O, E, X, O, E, E, E, E]);
        assert_eq!(optimal(board, X), 6);
    }

    #[test]
    fn test_selected_move_is_empty_and_board_unchanged() {
        let board = Board::from_cells([X, E, O, E, X, E, E, E, E]);
        let snapshot = board;
        let mut rng = SessionRng::new(3);
        for difficulty in [Difficulty::Random, Difficulty::Optimal] {
            let index = select_move(&board, difficulty, &mut rng).unwrap();
            assert_eq!(board.get(index), Some(E));
            assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn test_optimal_self_play_is_draw() {
        let mut board = Board::new();
        let mut rng = SessionRng::new(11);
        while evaluate(&board) == Outcome::InProgress {
            let mark = board.next_mark();
            let index = calculate_move(Difficulty::Optimal, BotInput::new(board, mark), &mut rng)
                .unwrap();
            board.place(index, mark).unwrap();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_random_covers_every_cell() {
        let board = Board::new();
        let mut rng = SessionRng::new(42);
        let mut seen = [false; CELL_COUNT];
        for _ in 0..1000 {
            let index = select_move(&board, Difficulty::Random, &mut rng).unwrap();
            assert!(index < CELL_COUNT);
            seen[index] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_random_only_picks_empty_cells() {
        let board = Board::from_cells([X, O, X, O, E, X, O, X, E]);
        let mut rng = SessionRng::new(5);
        for _ in 0..100 {
            let index = select_move(&board, Difficulty::Random, &mut rng).unwrap();
            assert!(index == 4 || index == 8);
        }
    }

    #[test]
    fn test_same_seed_gives_same_random_moves() {
        let board = Board::new();
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        for _ in 0..20 {
            assert_eq!(
                select_move(&board, Difficulty::Random, &mut a),
                select_move(&board, Difficulty::Random, &mut b)
            );
        }
    }

    #[test]
    fn test_terminal_board_is_invalid_state() {
        let won = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let full = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let mut rng = SessionRng::new(0);
        for board in [won, full] {
            for difficulty in [Difficulty::Random, Difficulty::Optimal] {
                assert!(matches!(
                    select_move(&board, difficulty, &mut rng),
                    Err(TicTacToeError::InvalidState(_))
                ));
            }
        }
    }

    #[test]
    fn test_empty_perspective_is_invalid_state() {
        let result = calculate_move(
            Difficulty::Optimal,
            BotInput::new(Board::new(), E),
            &mut SessionRng::new(0),
        );
        assert!(matches!(result, Err(TicTacToeError::InvalidState(_))));
    }
}
