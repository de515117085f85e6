use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Mark, WinningLine};

/// Text board. Empty cells show their 1-based number; a winning line is
/// drawn in brackets.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIZE * 2 - 1);

    for (row_index, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(column, &mark)| {
                let index = row_index * BOARD_SIZE + column;
                let symbol = match mark {
                    Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                    mark => mark.symbol(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        lines.push(cells.join("|"));
        if row_index + 1 < BOARD_SIZE {
            lines.push("---+---+---".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::check_win_with_line;
    use tictactoe_common::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::new(), None), expected);
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let line = check_win_with_line(&board);
        let rendered = render_board(&board, line.as_ref());
        assert!(rendered.starts_with("[X]|[X]|[X]\n"));
        assert!(rendered.contains(" O | O | 6 "));
    }
}
