//! Serpent - prints a position and the moves available in it.
//!
//! Reads a FEN (the start position by default), renders the board and lists
//! the generated moves. `--legal` filters out moves that leave the king in
//! check, `--perft` counts the legal move tree instead.

mod render;

use anyhow::Context;
use clap::Parser;
use render::{describe_state, render_board, BoardStyle};
use serpent_core::STARTPOS;
use serpent_engine::movegen::perft::perft_divide;
use serpent_engine::{generate_moves, legal_moves, notation, Position};
use tracing_subscriber::EnvFilter;

/// Serpent - bitboard move generator.
#[derive(Parser, Debug)]
#[command(name = "serpent")]
#[command(about = "Renders a chess position and lists its moves")]
struct Args {
    /// Position to load, in Forsyth-Edwards Notation
    #[arg(short, long, env = "SERPENT_FEN", default_value = STARTPOS)]
    fen: String,

    /// Only list moves that do not leave the king in check
    #[arg(long)]
    legal: bool,

    /// Print a perft divide to the given depth instead of the move list
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u32>,

    /// Draw pieces as letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    tracing::info!("Starting serpent");
    tracing::info!("Using FEN: {}", args.fen);

    let position = Position::from_fen(&args.fen)
        .with_context(|| format!("could not parse FEN '{}'", args.fen))?;
    tracing::debug!("Parsed position: {:?}", position.to_setup());

    let style = if args.ascii {
        BoardStyle::Ascii
    } else {
        BoardStyle::Unicode
    };
    println!("{}", render_board(&position, style));
    println!("{}", describe_state(&position));

    if let Some(depth) = args.perft {
        tracing::info!("Running perft to depth {}", depth);
        let results = perft_divide(&position, depth);
        for (mv, nodes) in &results {
            println!("{}: {}", mv, nodes);
        }
        let total: u64 = results.iter().map(|(_, nodes)| nodes).sum();
        println!();
        println!("Nodes searched: {}", total);
        return Ok(());
    }

    let moves = if args.legal {
        legal_moves(&position)
    } else {
        generate_moves(&position)
    };
    tracing::info!(
        "Generated {} {} moves",
        moves.len(),
        if args.legal { "legal" } else { "pseudo-legal" }
    );

    let text: Vec<String> = moves.iter().map(notation::to_notation).collect();
    println!("{}", text.join(", "));

    Ok(())
}
