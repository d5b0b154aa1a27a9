mod board;
mod bot_controller;
mod error;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, Cells, actions, initial_state, is_valid_move, player, result};
pub use bot_controller::{BotType, calculate_move};
pub use error::{EngineError, InvalidMoveReason};
pub use minimax::{best_move, max_value, min_value, minimax, value};
pub use types::{BOARD_SIZE, GameOutcome, Mark, Move, WinningLine};
pub use win_detector::{outcome, terminal, utility, winner, winning_line};
