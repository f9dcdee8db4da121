//! Reversi engine CLI
//!
//! ## Usage
//!
//! - `reversi` / `reversi demo` - show the opening position and a searched reply
//! - `reversi selfplay` - play a full AI vs AI game and print the result

use clap::{Parser, Subcommand};

use reversi::rules::legal_moves;
use reversi::{AiEngine, Board, GameState, Side, DEFAULT_SEARCH_DEPTH};

/// Reversi game-state engine
#[derive(Parser)]
#[command(name = "reversi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth for the AI
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game, AI against AI, and print the result
    Selfplay,
    /// Show the opening position, its legal moves, and one searched reply
    Demo,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay) => run_selfplay(cli.depth),
        Some(Commands::Demo) | None => run_demo(cli.depth),
    }
}

fn run_demo(depth: u8) {
    let board = Board::new();
    println!("Opening position:\n{board}");

    let moves = legal_moves(&board, Side::Dark);
    println!("Dark has {} legal moves:", moves.len());
    for mv in &moves {
        println!("  ({}, {})", mv.row, mv.col);
    }

    let engine = AiEngine::new(depth);
    let result = engine.choose_move(&board, Side::Dark);
    match result.best_move {
        Some(mv) => println!(
            "\nSearch at depth {depth} picks ({}, {}) with value {}",
            mv.row, mv.col, result.score
        ),
        None => println!("\nDark has no move and must pass"),
    }
}

fn run_selfplay(depth: u8) {
    let mut game = GameState::with_engine(AiEngine::new(depth));
    println!("Self-play at depth {depth}\n");

    while !game.is_over() {
        let side = game.current_turn;
        let result = game.ai_move();
        match result.best_move {
            Some(mv) => println!("{side} plays ({}, {})", mv.row, mv.col),
            // Only reachable with a zero depth budget.
            None => break,
        }
    }

    println!("\nFinal position:\n{}", game.board);
    let (dark, light) = game.score();
    println!("Dark {dark} - Light {light}");
    if let Some(result) = game.over {
        println!("{result}");
    }
}
