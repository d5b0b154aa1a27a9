use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::{Board, actions};
use super::minimax::minimax;
use super::types::Move;
use super::win_detector::terminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotType::Random => write!(f, "random"),
            BotType::Minimax => write!(f, "minimax"),
        }
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(BotType::Random),
            "minimax" => Ok(BotType::Minimax),
            other => Err(format!("Unknown bot type '{}', expected random or minimax", other)),
        }
    }
}

pub fn calculate_move<R: Rng + ?Sized>(
    bot_type: BotType,
    board: &Board,
    rng: &mut R,
) -> Option<Move> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => minimax(board),
    }
}

fn calculate_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    if terminal(board) {
        return None;
    }
    let available_moves = actions(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
