use super::board::Board;
use super::types::{BOARD_SIZE, GameOutcome, Mark, Move, WinningLine};

const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Rows first, then columns, then the two diagonals.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = line;
        let mark = cells[r0][c0];
        if mark != Mark::Empty && cells[r1][c1] == mark && cells[r2][c2] == mark {
            let moves = line.map(|(row, col)| Move::new(row, col));
            return Some(WinningLine::new(mark, moves));
        }
    }
    None
}

pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Score from X's point of view; 0 for draws and unfinished games.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}

pub fn outcome(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(Mark::X) => GameOutcome::XWon,
        Some(Mark::O) => GameOutcome::OWon,
        _ if board.is_full() => GameOutcome::Draw,
        _ => GameOutcome::InProgress,
    }
}
