use super::board::{Board, actions, player, successor};
use super::types::{Mark, Move};
use super::win_detector::{terminal, utility};

const MAX_UTILITY: i32 = 1;
const MIN_UTILITY: i32 = -1;

/// Optimal move for the side to act, or `None` once the game is over.
pub fn minimax(board: &Board) -> Option<Move> {
    best_move(board).map(|(mv, _)| mv)
}

/// Like [`minimax`], but also returns the value of the chosen move.
///
/// X maximizes and O minimizes. The best move is replaced only on a strict
/// improvement, so among equally good moves the first one in `actions` order
/// wins.
pub fn best_move(board: &Board) -> Option<(Move, i32)> {
    if terminal(board) {
        return None;
    }

    let mut best: Option<(Move, i32)> = None;

    if player(board) == Mark::X {
        for mv in actions(board) {
            let value = min_value(&successor(board, mv));
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }
    } else {
        for mv in actions(board) {
            let value = max_value(&successor(board, mv));
            if best.is_none_or(|(_, best_value)| value < best_value) {
                best = Some((mv, value));
            }
        }
    }

    best
}

/// Game-theoretic value of the position with both sides playing optimally.
pub fn value(board: &Board) -> i32 {
    match player(board) {
        Mark::X => max_value(board),
        _ => min_value(board),
    }
}

pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mut v = i32::MIN;
    for mv in actions(board) {
        v = v.max(min_value(&successor(board, mv)));
        if v == MAX_UTILITY {
            return v;
        }
    }
    v
}

pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }

    let mut v = i32::MAX;
    for mv in actions(board) {
        v = v.min(max_value(&successor(board, mv)));
        if v == MIN_UTILITY {
            return v;
        }
    }
    v
}
