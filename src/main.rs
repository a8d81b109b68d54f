//! Self-play driver (default binary).
//!
//! Stands in for the external capture/inject control loop: a seeded 7-bag
//! stream plays the role of the recognizer, the search result is applied
//! straight to the board instead of being turned into key presses, and the
//! run ends on top-out or when the piece budget is spent. Useful for tuning
//! evaluator weights and for eyeballing engine behavior over long games.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use blockpilot::core::rules::{clear_lines, place_block};
use blockpilot::core::{masks, Board, GameState, PieceBag};
use blockpilot::engine::{search, EvalWeights, SearchConfig, SearchError};
use blockpilot::types::SPAWN_COL;

#[derive(Parser)]
#[command(about = "Headless self-play run of the blockpilot decision engine")]
struct Args {
    /// RNG seed for the 7-bag piece stream
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Maximum number of pieces to place
    #[arg(long, default_value_t = 500)]
    pieces: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Override the per-hole penalty weight
    #[arg(long)]
    hole_weight: Option<f32>,

    /// Override the adjacent-column height-difference penalty weight
    #[arg(long)]
    bumpiness_weight: Option<f32>,

    /// Second-ply score when the next piece has no legal placement
    #[arg(long, default_value_t = 0)]
    dead_end_penalty: i32,
}

#[derive(Default)]
struct RunStats {
    pieces_placed: usize,
    lines_cleared: usize,
    /// Clear histogram indexed by lines cleared per move (4 = four or more).
    clears: [usize; 5],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut weights = EvalWeights::default();
    if let Some(hole) = args.hole_weight {
        weights.hole = hole;
    }
    if let Some(bumpiness) = args.bumpiness_weight {
        weights.bumpiness = bumpiness;
    }
    let config = SearchConfig {
        weights,
        dead_end_penalty: args.dead_end_penalty,
    };

    let stats = run(args.seed, args.pieces, &config)?;

    info!(
        pieces = stats.pieces_placed,
        lines = stats.lines_cleared,
        singles = stats.clears[1],
        doubles = stats.clears[2],
        triples = stats.clears[3],
        quads = stats.clears[4],
        "run finished"
    );
    Ok(())
}

fn run(seed: u32, piece_budget: usize, config: &SearchConfig) -> anyhow::Result<RunStats> {
    let mut bag = PieceBag::new(seed);
    let mut board = Board::new();
    let mut state = GameState::new();

    let mut current = bag.next();
    let mut next = bag.next();
    state.update_current_piece(current);
    state.update_next_piece(next);
    state.set_fresh(true);

    let mut stats = RunStats::default();

    for _ in 0..piece_budget {
        let placement = match search(&state, config) {
            Ok(placement) => placement,
            Err(SearchError::NoLegalPlacement) => {
                info!(pieces = stats.pieces_placed, "topped out");
                break;
            }
            Err(err) => return Err(err).context("search failed"),
        };
        state.set_fresh(false);

        // What the input injector would issue for this placement.
        let rotations = placement.spin;
        let shift = placement.col - SPAWN_COL;

        let mask = &masks(current)[placement.spin];
        let stamped = place_block(&board, mask, placement.row, placement.col)
            .context("enumerated placement failed to stamp")?;
        let (after, cleared) = clear_lines(&stamped);

        debug!(
            piece = current.as_str(),
            spin = placement.spin,
            row = placement.row,
            col = placement.col,
            rotations,
            shift,
            cleared,
            "placed piece"
        );

        board = after;
        stats.pieces_placed += 1;
        stats.lines_cleared += cleared;
        stats.clears[cleared.min(4)] += 1;

        // Next frame, as the recognizer would report it.
        current = next;
        next = bag.next();
        state
            .update_board(&board.to_rows())
            .context("driver produced a malformed board")?;
        state.update_current_piece(current);
        state.update_next_piece(next);
        state.set_fresh(true);
    }

    Ok(stats)
}
