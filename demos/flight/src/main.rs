//! flight — one simulated hour in a 27-row, 3-3-3 cabin.
//!
//! Usage: `flight [config.toml]`.  Log verbosity follows `RUST_LOG`
//! (default `info`); `RUST_LOG=cabin_movement=trace` shows every seat
//! collision.  Ctrl-C stops the run between ticks and still releases the
//! field solver.

mod config;

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::time::Instant;

use anyhow::{Context, Result};
use cabin_field::{
    FieldError, FieldResult, FieldSolver, GaussianPlumeSolver, SolverKind, SolverSession,
    acquire_or_fallback,
};
use cabin_sim::{ProgressReport, SimBuilder, SimObserver};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Backend, FlightConfig};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Keeps the periodic progress reports for the closing table.
#[derive(Default)]
struct InfectionCurve {
    points: Vec<ProgressReport>,
}

impl SimObserver for InfectionCurve {
    fn on_progress(&mut self, report: &ProgressReport) {
        self.points.push(*report);
    }
}

// ── Solver selection ──────────────────────────────────────────────────────────

/// No CFD engine is linked into this binary, so launching always fails and
/// the run continues on the plume fallback.
fn launch_external(mesh: Option<&Path>) -> FieldResult<Box<dyn FieldSolver>> {
    let mesh = mesh.map_or_else(|| "<none>".to_owned(), |p| p.display().to_string());
    Err(FieldError::Unavailable(format!("no external CFD engine linked (mesh {mesh})")))
}

fn open_session(config: &FlightConfig) -> FieldResult<SolverSession<Box<dyn FieldSolver>>> {
    let dims = &config.cabin.dimensions;
    let plume = GaussianPlumeSolver::new(dims.length, dims.width, config.plume.clone())?;
    Ok(match config.solver.backend {
        Backend::External => {
            acquire_or_fallback(|| launch_external(config.solver.mesh_path.as_deref()), plume)
        }
        Backend::Fallback => {
            let solver: Box<dyn FieldSolver> = Box::new(plume);
            SolverSession::new(solver, SolverKind::Fallback)
        }
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = FlightConfig::load(path.as_deref())?;
    info!(
        config = %path.as_deref().map_or_else(|| "<defaults>".to_owned(), |p| p.display().to_string()),
        seed = config.sim.seed,
        ticks = config.sim.total_ticks,
        front_rows = config.cabin.dimensions.front_rows,
        rear_rows = config.cabin.dimensions.rear_rows,
        "configuration loaded"
    );

    let session = open_session(&config).context("configuring the field solver")?;
    let mut sim = SimBuilder::new(config.sim.clone(), session)
        .cabin_config(config.cabin.clone())
        .movement(config.movement.clone())
        .transmission(config.transmission.clone())
        .build()?;

    let stop = sim.interrupt_handle();
    ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
        .context("installing Ctrl-C handler")?;

    let mut curve = InfectionCurve::default();
    let t0 = Instant::now();
    let summary = sim.run(&mut curve)?;
    let elapsed = t0.elapsed();
    sim.finish()?;

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {summary}");
    if summary.interrupted {
        println!("  (stopped early at {})", summary.final_tick);
    }
    println!();
    println!("{:>8} {:>10} {:>8} {:>8}", "Time", "Infected", "Front", "Rear");
    println!("{}", "-".repeat(37));
    for point in &curve.points {
        println!(
            "{:>8.0} {:>10} {:>8} {:>8}",
            point.time,
            format!("{}/{}", point.counts.infected, point.counts.population),
            point.counts.front,
            point.counts.rear,
        );
    }

    Ok(())
}
