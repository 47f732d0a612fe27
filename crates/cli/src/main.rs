use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lp2d::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod problem;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Two-variable LP solver (graphical method)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a problem file and print the optimum
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON solution report for plotting
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sample the feasible region as a point cloud for plotting
    Region {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Grid density per axis (display fidelity, not correctness)
        #[arg(long, default_value_t = 100)]
        resolution: usize,
        #[arg(long, default_value_t = 10.0)]
        max_x: f64,
        #[arg(long, default_value_t = 10.0)]
        max_y: f64,
    },
    /// Print the JSON solution document to stdout
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { input, out } => run_solve(&input, out.as_deref()),
        Action::Region {
            input,
            out,
            resolution,
            max_x,
            max_y,
        } => run_region(&input, &out, resolution, max_x, max_y),
        Action::Report { input } => run_report(&input),
    }
}

fn run_solve(input: &Path, out: Option<&Path>) -> Result<()> {
    let program = problem::load_program(input)?;
    let cfg = LpCfg::default();
    tracing::info!(
        input = %input.display(),
        constraints = program.constraints().len(),
        "solve"
    );
    let solution = solve(&program, cfg);
    println!(
        "{}",
        problem::render_summary(&solution, program.objective().sense)
    );
    if let Some(out) = out {
        let doc = problem::solution_json(&program, &solution, cfg);
        write_json(out, &doc)?;
        tracing::info!(out = %out.display(), "solution_report_written");
    }
    Ok(())
}

fn run_region(input: &Path, out: &Path, resolution: usize, max_x: f64, max_y: f64) -> Result<()> {
    let program = problem::load_program(input)?;
    let cfg = LpCfg::default();
    let bounds = Bounds { max_x, max_y };
    tracing::info!(input = %input.display(), resolution, "region");
    let points = sample_region(&program, bounds, resolution, cfg);
    let doc = serde_json::json!({
        "bounds": { "max_x": bounds.max_x, "max_y": bounds.max_y },
        "resolution": resolution,
        "points": points
            .iter()
            .map(|p| serde_json::json!({ "x": p.x, "y": p.y }))
            .collect::<Vec<_>>(),
    });
    write_json(out, &doc)?;
    tracing::info!(out = %out.display(), kept = points.len(), "region_written");
    Ok(())
}

fn run_report(input: &Path) -> Result<()> {
    let program = problem::load_program(input)?;
    let cfg = LpCfg::default();
    let solution = solve(&program, cfg);
    let doc = problem::solution_json(&program, &solution, cfg);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_json(path: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}
