use super::error::TicTacToeError;
use super::types::{BOARD_SIZE, CELL_COUNT, CellIndex, Mark};

/// A 3x3 board, cells indexed 0..9 in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Mark that moves next given strictly alternating turns with X first.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Places `mark` on an empty cell. The board is left untouched on error.
    pub fn place(&mut self, index: CellIndex, mark: Mark) -> Result<(), TicTacToeError> {
        if mark == Mark::Empty {
            return Err(TicTacToeError::InvalidPlacement(
                "Cannot place an empty mark".to_string(),
            ));
        }
        if !is_valid_move(self, index) {
            return Err(TicTacToeError::InvalidPlacement(if index >= CELL_COUNT {
                format!("Position {} is out of bounds", index)
            } else {
                format!("Cell {} is already marked", index)
            }));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Copy of this board with `mark` at `index`, used by the search so the
    /// caller's board is never touched.
    pub(crate) fn with_mark(&self, index: CellIndex, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

pub fn get_available_moves(board: &Board) -> Vec<CellIndex> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: CellIndex) -> bool {
    board.get(index) == Some(Mark::Empty)
}
