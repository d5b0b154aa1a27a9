mod config;
mod runner;

use std::io;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{Board, BotType, Mark, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Optimal tic-tac-toe via exhaustive minimax search")]
struct Args {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Path to the YAML config file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the optimal move for a position, e.g. `XOX/XO./O..`.
    BestMove {
        #[arg(long)]
        board: Board,
    },
    /// Let two bots play a game to the end.
    SelfPlay {
        #[arg(long)]
        board: Option<Board>,
        #[arg(long)]
        x: Option<BotType>,
        #[arg(long)]
        o: Option<BotType>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play against a bot on stdin/stdout.
    Play {
        #[arg(long)]
        mark: Option<Mark>,
        #[arg(long)]
        opponent: Option<BotType>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(args.config.as_deref()).get_config()?;
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::BestMove { board } => {
            log!("Searching best move for {}", board.to_compact());
            runner::run_best_move(&board, &mut stdout)?;
        }
        Command::SelfPlay { board, x, o, seed } => {
            let x = x.unwrap_or(config.self_play.x);
            let o = o.unwrap_or(config.self_play.o);
            let start = board.unwrap_or_default();
            log!("Self-play {} vs {} from {}", x, o, start.to_compact());
            let mut rng = make_rng(seed);
            let report =
                runner::run_self_play(start, x, o, config.show_values, &mut rng, &mut stdout)?;
            log!("Self-play finished after {} moves: {}", report.moves.len(), report.outcome);
        }
        Command::Play { mark, opponent, seed } => {
            let human = mark.unwrap_or(config.play.human_mark);
            let opponent = opponent.unwrap_or(config.play.opponent);
            log!("Interactive game: human {} vs {}", human, opponent);
            let mut rng = make_rng(seed);
            let mut stdin = io::stdin().lock();
            let report = runner::run_interactive(
                human,
                opponent,
                config.show_values,
                &mut rng,
                &mut stdin,
                &mut stdout,
            )?;
            log!(
                "Game finished: {} after {} moves, final position {}",
                report.outcome,
                report.moves.len(),
                report.final_board.to_compact()
            );
        }
    }

    Ok(())
}
