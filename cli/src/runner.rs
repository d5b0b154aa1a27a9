use std::error::Error;
use std::io::{BufRead, Write};

use rand::Rng;
use tictactoe_engine::{
    Board, BotType, GameOutcome, Mark, Move, best_move, calculate_move, outcome, player, result,
    terminal, value, winning_line,
};

pub struct GameReport {
    pub final_board: Board,
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
}

/// Accepts `row col` or `row,col`.
pub fn parse_move_input(line: &str) -> Result<Move, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(format!("Expected 'row col', got '{}'", line.trim()));
    }
    let row = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("Invalid row '{}'", parts[0]))?;
    let col = parts[1]
        .parse::<usize>()
        .map_err(|_| format!("Invalid column '{}'", parts[1]))?;
    Ok(Move::new(row, col))
}

pub fn run_best_move<W: Write>(board: &Board, out: &mut W) -> Result<Option<Move>, Box<dyn Error>> {
    writeln!(out, "{}", board)?;
    match best_move(board) {
        Some((mv, v)) => {
            writeln!(out, "{} to move: best move {} (value {})", player(board), mv, v)?;
            Ok(Some(mv))
        }
        None => {
            writeln!(out, "Game over: {}", outcome(board))?;
            Ok(None)
        }
    }
}

pub fn run_self_play<R: Rng + ?Sized, W: Write>(
    start: Board,
    x: BotType,
    o: BotType,
    show_values: bool,
    rng: &mut R,
    out: &mut W,
) -> Result<GameReport, Box<dyn Error>> {
    let mut board = start;
    let mut moves = Vec::new();

    writeln!(out, "{}\n", board)?;
    while !terminal(&board) {
        let mark = player(&board);
        let bot = if mark == Mark::X { x } else { o };
        let mv = calculate_move(bot, &board, rng)
            .ok_or_else(|| format!("{} bot returned no move", bot))?;
        if show_values {
            writeln!(out, "{} ({}) plays {}, position value {}", mark, bot, mv, value(&board))?;
        } else {
            writeln!(out, "{} ({}) plays {}", mark, bot, mv)?;
        }
        board = result(&board, mv)?;
        moves.push(mv);
        writeln!(out, "{}\n", board)?;
    }

    finish(board, moves, out)
}

pub fn run_interactive<R: Rng + ?Sized, I: BufRead, W: Write>(
    human: Mark,
    opponent: BotType,
    show_values: bool,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<GameReport, Box<dyn Error>> {
    let mut board = Board::initial();
    let mut moves = Vec::new();

    writeln!(out, "You play {}. Enter moves as 'row col' (0-2).", human)?;
    writeln!(out, "{}\n", board)?;
    while !terminal(&board) {
        let mark = player(&board);
        let mv = if mark == human {
            write!(out, "Your move: ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err("Input closed before the game finished".into());
            }
            let mv = match parse_move_input(&line) {
                Ok(mv) => mv,
                Err(message) => {
                    writeln!(out, "{}", message)?;
                    continue;
                }
            };
            match result(&board, mv) {
                Ok(next) => {
                    board = next;
                    mv
                }
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            }
        } else {
            let mv = calculate_move(opponent, &board, rng)
                .ok_or_else(|| format!("{} bot returned no move", opponent))?;
            if show_values {
                writeln!(out, "{} plays {}, position value {}", mark, mv, value(&board))?;
            } else {
                writeln!(out, "{} plays {}", mark, mv)?;
            }
            board = result(&board, mv)?;
            mv
        };
        moves.push(mv);
        writeln!(out, "{}\n", board)?;
    }

    finish(board, moves, out)
}

fn finish<W: Write>(board: Board, moves: Vec<Move>, out: &mut W) -> Result<GameReport, Box<dyn Error>> {
    let game_outcome = outcome(&board);
    match winning_line(&board) {
        Some(line) => writeln!(
            out,
            "Game over: {} ({} to {})",
            game_outcome,
            line.start(),
            line.end()
        )?,
        None => writeln!(out, "Game over: {}", game_outcome)?,
    }
    Ok(GameReport {
        final_board: board,
        outcome: game_outcome,
        moves,
    })
}
