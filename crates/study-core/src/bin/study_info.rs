//! Print a summary of an annotated study file.
//!
//! Parses a move-text file into a game tree and reports its stats, the
//! mainline, variations per nesting depth, and the end position of the
//! mainline.
//!
//! Usage: cargo run --bin study-info -- <notation-file>

use std::env;
use std::fs;

use anyhow::{bail, Context};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode};
use tracing_subscriber::EnvFilter;

use study_core::config::StudyConfig;
use study_core::{navigator, notation, replay, stats};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = StudyConfig::from_env();

    let Some(path) = env::args().nth(1) else {
        bail!("usage: study-info <notation-file>");
    };
    let text = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;

    let tree = notation::parse_notation(&text)?;
    let tree_stats = stats::collect(&tree);
    tracing::info!(
        moves = tree_stats.total_moves,
        variations = tree_stats.total_variations,
        "parsed study"
    );

    println!("moves:           {}", tree_stats.total_moves);
    println!("mainline moves:  {}", tree_stats.mainline_moves);
    println!("variations:      {}", tree_stats.total_variations);
    println!("max depth:       {}", tree_stats.max_depth);

    let mainline = navigator::mainline(&tree);
    let line: Vec<String> = mainline
        .iter()
        .map(|&id| tree.format_token(id))
        .collect();
    println!("mainline:        {}", line.join(" "));

    for depth in 1..=config.max_variation_depth {
        let heads = navigator::variations_at_depth(&tree, depth);
        if heads.is_empty() {
            break;
        }
        let tokens: Vec<String> = heads.iter().map(|&id| tree.format_token(id)).collect();
        println!("depth {depth}:         {}", tokens.join(", "));
    }

    if let Some(&last) = mainline.last() {
        let start: Chess = match &config.start_fen {
            Some(fen) => fen
                .parse::<Fen>()
                .context("invalid STUDY_START_FEN")?
                .into_position(CastlingMode::Standard)
                .context("STUDY_START_FEN is not a playable position")?,
            None => Chess::default(),
        };
        let tokens = navigator::path_to(&tree, last).unwrap_or_default();
        match replay::replay_from(start, &tokens) {
            Ok(pos) => {
                let fen = Fen::from_position(&pos, EnPassantMode::Legal);
                println!("end position:    {fen}");
            }
            Err(err) => {
                tracing::warn!(step = err.step, token = %err.token, "mainline does not replay");
                let fen = Fen::from_position(&*err.last_valid, EnPassantMode::Legal);
                println!("replay stopped:  step {} ({}), last valid {fen}", err.step, err.token);
            }
        }
    }

    println!("notation:        {}", notation::write_notation(&tree));

    Ok(())
}
