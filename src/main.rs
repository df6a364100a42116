//! Branch-and-bound TSP benchmark.
//!
//! Usage:
//!     tsp-bnb --plan test.INI --output results.csv
//!
//! Each plan line names a cost matrix file and a repeat count. Every
//! instance is solved with the recursive search; the first three are also
//! solved breadth-first and depth-first. Set `RUST_LOG=u_bnb=debug` to see
//! each incumbent improvement.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use u_bnb::bnb::{BnbConfig, BoundRule, Strategy};
use u_bnb::harness::{Harness, HarnessConfig, RunPlan, DEFAULT_PLAN, DEFAULT_REPORT};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyChoice {
    /// Recursive depth-first ("Low cost")
    Recursive,
    /// Breadth-first queue ("Breadth search")
    Breadth,
    /// Depth-first stack ("Depth search")
    Depth,
}

impl From<StrategyChoice> for Strategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Recursive => Strategy::Recursive,
            StrategyChoice::Breadth => Strategy::BreadthFirst,
            StrategyChoice::Depth => Strategy::DepthFirst,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BoundChoice {
    /// Cheapest edge to another unvisited location or the origin
    NearestSuccessor,
    /// Cheapest edge to another unvisited location only
    NearestRemaining,
}

impl From<BoundChoice> for BoundRule {
    fn from(choice: BoundChoice) -> Self {
        match choice {
            BoundChoice::NearestSuccessor => BoundRule::NearestSuccessor,
            BoundChoice::NearestRemaining => BoundRule::NearestRemaining,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tsp-bnb")]
#[command(about = "Exact branch-and-bound TSP benchmark")]
struct Args {
    /// Plan file: one `<matrix file> <repeats> <anything>` entry per line.
    #[arg(long, default_value = DEFAULT_PLAN)]
    plan: PathBuf,

    /// CSV report to append results to.
    #[arg(long, default_value = DEFAULT_REPORT)]
    output: PathBuf,

    /// Number of leading plan entries solved with every strategy.
    #[arg(long, default_value_t = 3)]
    full_strategy_inputs: usize,

    /// Only run these strategies (repeatable).
    #[arg(long, value_enum)]
    strategy: Vec<StrategyChoice>,

    /// Lower-bound relaxation.
    #[arg(long, value_enum, default_value = "nearest-successor")]
    bound: BoundChoice,

    /// Abort any single solve after this many seconds.
    #[arg(long)]
    time_limit: Option<f64>,

    /// Disable pruning (enumerates every tour).
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("u_bnb=info")),
        )
        .init();

    let args = Args::parse();

    let mut solver = BnbConfig::default()
        .with_bound(args.bound.into())
        .with_pruning(!args.no_pruning);
    if let Some(secs) = args.time_limit {
        let limit = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid --time-limit {secs}"))?;
        solver = solver.with_time_limit(limit);
    }
    solver.validate()?;

    let mut config = HarnessConfig::default()
        .with_report(&args.output)
        .with_full_strategy_inputs(args.full_strategy_inputs)
        .with_solver(solver);
    if !args.strategy.is_empty() {
        config = config.with_strategies(args.strategy.iter().map(|&s| s.into()).collect());
    }

    let plan = RunPlan::load(&args.plan)
        .with_context(|| format!("failed to read plan {}", args.plan.display()))?;
    if plan.is_empty() {
        anyhow::bail!("plan {} has no entries", args.plan.display());
    }

    let records = Harness::new(config)
        .run(&plan)
        .context("benchmark run failed")?;

    for record in &records {
        println!(
            "{:<40} {:<15} cost {:>8}  mean {:.6} s over {} runs",
            record.input,
            record.strategy.label(),
            record.cost,
            record.mean_time().as_secs_f64(),
            record.repeats,
        );
    }
    println!("results appended to {}", args.output.display());

    Ok(())
}
