//! Standalone bot-versus-random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --level 2 --max-plies 120 --verbose`
//!
//! The bot searches at the given intelligence level; the human side plays
//! uniformly random legal moves, promoting to a queen when a pawn reaches
//! the far rank.

use std::time::Instant;

use rand::prelude::IndexedRandom;

use quince_chess::errors::EngineError;
use quince_chess::game_state::chess_rules::Game;
use quince_chess::game_state::chess_types::{PieceClass, Side};
use quince_chess::search::alpha_beta::Bot;
use quince_chess::utils::board_text::render_board;

struct RunConfig {
    level: u8,
    max_plies: u32,
    verbose: bool,
}

fn parse_args() -> RunConfig {
    let args: Vec<String> = std::env::args().collect();

    let value_of = |flag: &str| -> Option<u32> {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .and_then(|v| v.parse().ok())
    };

    RunConfig {
        level: value_of("--level").unwrap_or(1) as u8,
        max_plies: value_of("--max-plies").unwrap_or(200),
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
    }
}

fn main() -> Result<(), EngineError> {
    env_logger::init();
    let config = parse_args();

    println!(
        "self-play started at {} (level {}, up to {} plies)",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        config.level,
        config.max_plies,
    );

    let game = Game::new();
    let mut state = game.initial_state();
    let mut bot = Bot::new(config.level);
    let mut rng = rand::rng();

    let start = Instant::now();
    let mut plies = 0u32;
    let mut bot_nodes = 0u64;

    while !state.is_terminal() && plies < config.max_plies {
        if state.is_bot_turn() {
            let Some(record) = bot.decide(&state)? else {
                println!("bot has no action after {plies} plies");
                break;
            };
            bot_nodes += record.num_nodes_expanded;
            if config.verbose {
                println!(
                    "ply {plies}: bot plays {} to ({}, {}) value {:.1} ({} nodes, {:.3}s)",
                    record.action_taken.piece.glyph(),
                    record.action_taken.destination.0,
                    record.action_taken.destination.1,
                    record.minimax_value,
                    record.num_nodes_expanded,
                    record.time_taken.as_secs_f64(),
                );
            }
            state = record.result_state;
        } else {
            let actions = game.actions(&state);
            let Some(action) = actions.as_slice().choose(&mut rng).copied() else {
                println!("human has no action after {plies} plies");
                break;
            };
            let promotes = action.piece.class == PieceClass::Pawn
                && action.destination.1 == Side::Human.promotion_rank();
            let promotion = promotes.then_some(PieceClass::Queen);
            state = game.result(&state, &action, promotion)?;
            if config.verbose {
                println!(
                    "ply {plies}: human plays {} to ({}, {})",
                    action.piece.glyph(),
                    action.destination.0,
                    action.destination.1,
                );
            }
        }

        plies += 1;
        if config.verbose {
            println!("{}", render_board(&state));
        }
    }

    println!("final position:\n{}", render_board(&state));
    if state.is_terminal() {
        match state.winner() {
            Some(Side::Bot) => println!("bot wins after {plies} plies"),
            Some(Side::Human) => println!("human wins after {plies} plies"),
            None => println!("draw after {plies} plies"),
        }
    } else {
        println!("no result within {plies} plies");
    }
    println!(
        "{} bot nodes expanded in {:.3}s total",
        bot_nodes,
        start.elapsed().as_secs_f64(),
    );

    Ok(())
}
