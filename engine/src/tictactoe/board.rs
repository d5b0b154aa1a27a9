use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::{BOARD_SIZE, Mark, Move};

pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// A 3x3 position. Boards are `Copy`, so applying a move always yields a new
/// board and never touches the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn initial() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from raw cells, rejecting mark counts no game can reach.
    pub fn from_cells(cells: Cells) -> Result<Self, EngineError> {
        let board = Self { cells };
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(EngineError::InvalidBoard(format!(
                "X count ({}) must equal O count ({}) or exceed it by one",
                x_count, o_count
            )));
        }
        Ok(board)
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn get(&self, mv: Move) -> Option<Mark> {
        if !mv.is_in_bounds() {
            return None;
        }
        Some(self.cells[mv.row][mv.col])
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Compact single-line form, e.g. `XOX/XO./O..`.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(Mark::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Accepts rows separated by `/` or newlines; cells are `X`, `O` or `.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .trim()
            .split(['/', '\n'])
            .map(str::trim)
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let marks = text
                .chars()
                .map(|c| {
                    Mark::from_char(c).ok_or_else(|| {
                        EngineError::InvalidBoard(format!("unexpected character '{}'", c))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if marks.len() != BOARD_SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    marks.len(),
                    BOARD_SIZE
                )));
            }
            cells[row].copy_from_slice(&marks);
        }

        Board::from_cells(cells)
    }
}

pub fn initial_state() -> Board {
    Board::initial()
}

/// X moves whenever an odd number of cells is still empty.
pub fn player(board: &Board) -> Mark {
    if board.empty_count() % 2 != 0 {
        Mark::X
    } else {
        Mark::O
    }
}

/// Empty cells in row-major order.
pub fn actions(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.empty_count());
    for (row, cells) in board.cells.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

pub fn result(board: &Board, mv: Move) -> Result<Board, EngineError> {
    match board.get(mv) {
        None => Err(EngineError::out_of_bounds(mv)),
        Some(Mark::Empty) => Ok(successor(board, mv)),
        Some(_) => Err(EngineError::occupied(mv)),
    }
}

/// Places the side to move on `mv`. Callers guarantee `mv` came from `actions`.
pub(super) fn successor(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    next.cells[mv.row][mv.col] = player(board);
    next
}

pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    board.get(mv) == Some(Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::error::InvalidMoveReason;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let b = initial_state();
        assert_eq!(b.empty_count(), 9);
        assert_eq!(player(&b), Mark::X);
        assert_eq!(actions(&b).len(), 9);
    }

    #[test]
    fn test_player_alternates() {
        let b = initial_state();
        let b = result(&b, Move::new(1, 1)).unwrap();
        assert_eq!(player(&b), Mark::O);
        let b = result(&b, Move::new(0, 0)).unwrap();
        assert_eq!(player(&b), Mark::X);
    }

    #[test]
    fn test_actions_are_row_major_empty_cells() {
        let b = board("XOX/XO./O..");
        assert_eq!(
            actions(&b),
            vec![Move::new(1, 2), Move::new(2, 1), Move::new(2, 2)]
        );
    }

    #[test]
    fn test_result_sets_only_target_cell() {
        let before = board("X../.O./...");
        let mv = Move::new(2, 2);
        let after = result(&before, mv).unwrap();

        assert_eq!(after.get(mv), Some(Mark::X));
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Move::new(row, col);
                if pos != mv {
                    assert_eq!(after.get(pos), before.get(pos));
                }
            }
        }
        assert_eq!(before.get(mv), Some(Mark::Empty));
    }

    #[test]
    fn test_result_rejects_occupied_cell() {
        let b = board("X../.../...");
        let err = result(&b, Move::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidMove { reason: InvalidMoveReason::Occupied, .. }
        ));
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let b = initial_state();
        let err = result(&b, Move::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidMove { reason: InvalidMoveReason::OutOfBounds, .. }
        ));
        assert!(!is_valid_move(&b, Move::new(3, 0)));
        assert!(is_valid_move(&b, Move::new(2, 2)));
    }

    #[test]
    fn test_parse_and_display() {
        let b = board("xo./.X./..o");
        assert_eq!(b.to_compact(), "XO./.X./..O");
        assert_eq!(b.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board(&b.to_string()), b);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(matches!("XOX/XO.".parse::<Board>(), Err(EngineError::InvalidBoard(_))));
        assert!(matches!("XOX/XO../O..".parse::<Board>(), Err(EngineError::InvalidBoard(_))));
        assert!(matches!("XOX/XZ./O..".parse::<Board>(), Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_cells_rejects_impossible_counts() {
        assert!("XX./.../...".parse::<Board>().is_err());
        assert!("O../.../...".parse::<Board>().is_err());
        assert!("XO./X../...".parse::<Board>().is_ok());
    }
}
