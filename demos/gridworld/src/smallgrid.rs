//! smallgrid — smallest end-to-end demo of the gridsweep engine.
//!
//! Loads an embedded 8-column map that contains two isolated pockets (a
//! 2-cell strip behind a wall and a 1-cell corner), normalizes it so the
//! pockets are demoted, then plans a full-coverage sweep and writes the move
//! log to `output/smallgrid/`.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use gs_agent::Agent;
use gs_core::{Heading, Pose};
use gs_plan::Planner;
use gs_report::{CsvReporter, PlanRecorder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH: u32 = 8;
const SEARCH_FRACTION: f32 = 1.0;
const MOVE_LIMIT: u32 = 400;

// The two `1`s in the top-right corner and the lone `1` at the bottom-left
// are cut off from the main region — normalization demotes all three.
const GRID_CSV: &str = "\
1,1,1,1,1,1,0,1\n\
1,1,0,0,1,1,0,1\n\
1,1,0,0,1,1,0,0\n\
1,1,1,1,1,1,0,0\n\
0,0,1,1,1,1,1,1\n\
1,0,1,1,1,1,1,1\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== smallgrid — gridsweep coverage demo ===");
    println!();

    // 1. Load the embedded map.
    let mut grid = gs_grid::load_reader(Cursor::new(GRID_CSV), WIDTH)?;
    println!("Loaded {}x{} map:", grid.row_count(), grid.col_count());
    grid.render(&mut std::io::stdout())?;
    println!();

    // 2. Normalize reachability.
    let stats = gs_grid::normalize(&mut grid).context("map has no usable main region")?;
    println!(
        "Normalized: seed {}, main region {} cells, {} pocket cells demoted",
        stats.seed, stats.region_len, stats.demoted
    );
    grid.render(&mut std::io::stdout())?;
    println!();

    // 3. Place the agent and plan.
    let start = Pose::new(0, 0, Heading::East);
    let agent = Agent::new(&mut grid, start)?;
    let mut planner = Planner::new(agent, SEARCH_FRACTION, MOVE_LIMIT);

    // 4. Record the run to CSV.
    std::fs::create_dir_all("output/smallgrid")?;
    let writer = CsvReporter::new(Path::new("output/smallgrid"))?;
    let mut recorder = PlanRecorder::new(writer);

    let log = planner.find_route_with(&mut recorder)?;
    if let Some(e) = recorder.take_error() {
        eprintln!("report error: {e}");
    }

    // 5. Summary.
    let summary = planner.summary();
    let final_pose = planner.agent().pose();
    drop(planner);

    println!("Plan complete:");
    println!("  moves:      {} of {} allowed", summary.total_moves, summary.move_limit);
    println!("  scans:      {} of {} targeted", summary.scanned_count, summary.target_scans);
    println!("  coverage:   {:.1}%", 100.0 * summary.coverage());
    println!("  final pose: {final_pose}");
    println!("  move log:   {} entries → output/smallgrid/move_log.csv", log.len());
    println!();

    println!("Scanned map ('*' = observed traversable):");
    grid.render(&mut std::io::stdout())?;
    grid.stats(&mut std::io::stdout())?;

    Ok(())
}
