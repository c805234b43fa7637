// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `mast` command line front-end.
//!
//! `mast solve` reads an island, plans the power increases and prints the
//! boosted grid together with the changed transmitters. `mast generate`
//! prints a random island in the same text format.

use clap::{Args, Parser, Subcommand};
use mast_model::{
    generator::IslandGenerator,
    island::Island,
    loading::{IslandLoader, IslandLoaderError, write_island},
    plan::PowerPlan,
    render::IslandRenderer,
};
use mast_search::result::SolverResult;
use mast_solver::solver::{SolverBuilder, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

#[derive(Parser)]
#[command(name = "mast")]
#[command(about = "Plans the cheapest transmitter power increases for an island")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an island read from a file or stdin
    Solve(SolveArgs),

    /// Print a random island
    Generate(GenerateArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Island file. Reads stdin when omitted
    file: Option<PathBuf>,

    /// Solving strategy (exact or greedy)
    #[arg(short, long, default_value_t = Strategy::Exact)]
    strategy: Strategy,

    /// Time limit in seconds
    #[arg(short, long)]
    time_limit: Option<u64>,

    /// Stop after this many improving plans
    #[arg(long)]
    solution_limit: Option<u64>,

    /// Print search progress
    #[arg(long)]
    log: bool,

    /// Do not print the boosted grid
    #[arg(long)]
    no_grid: bool,

    /// Reject lines that are neither towers nor dimensions
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Smallest grid dimension
    #[arg(long, default_value = "10")]
    min_size: i64,

    /// Largest grid dimension
    #[arg(long, default_value = "40")]
    max_size: i64,

    /// Largest number of transmitters
    #[arg(long, default_value = "10")]
    max_transmitters: usize,

    /// Largest number of receivers
    #[arg(long, default_value = "10")]
    max_receivers: usize,

    /// Largest initial transmitter power
    #[arg(long, default_value = "5")]
    max_power: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Generate(args) => generate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn load(args: &SolveArgs) -> Result<Island<i64>, IslandLoaderError> {
    let loader = IslandLoader::<i64>::new().strict(args.strict);
    match &args.file {
        Some(path) => loader.from_path(path),
        None => loader.from_reader(io::stdin().lock()),
    }
}

fn solve(args: SolveArgs) -> Result<(), String> {
    let island = load(&args).map_err(|e| e.to_string())?;

    let mut builder = SolverBuilder::new()
        .with_strategy(args.strategy)
        .with_progress_log(args.log);
    if let Some(seconds) = args.time_limit {
        builder = builder.with_time_limit(Duration::from_secs(seconds));
    }
    if let Some(limit) = args.solution_limit {
        builder = builder.with_solution_limit(limit);
    }
    let mut solver = builder.build::<i64>();

    let outcome = solver.solve(&island);
    if args.log {
        println!("{}", outcome);
    }

    let plan = match outcome.result {
        SolverResult::Optimal(plan) | SolverResult::Feasible(plan) => plan,
        SolverResult::Infeasible => {
            return Err("no transmitter can cover the remaining receivers".to_string());
        }
        SolverResult::Unknown => {
            return Err(format!("no plan found ({})", outcome.reason));
        }
    };

    let boosted = island.with_power_plan(&plan);
    let stdout = io::stdout();
    write_report(&boosted, &plan, !args.no_grid, stdout.lock()).map_err(|e| e.to_string())
}

/// Writes the optional grid, the `covered/total` line and one `id power`
/// line per changed transmitter in ascending id order.
fn write_report<W: Write>(
    boosted: &Island<i64>,
    plan: &PowerPlan<i64>,
    grid: bool,
    mut out: W,
) -> io::Result<()> {
    if grid {
        write!(out, "{}", IslandRenderer::new(boosted))?;
    }

    let coverage = boosted.coverage();
    writeln!(
        out,
        "{}/{}",
        coverage.num_covered_receivers(),
        boosted.num_receivers()
    )?;

    let mut changes: Vec<_> = plan.changes().iter().collect();
    changes.sort_unstable_by_key(|change| change.transmitter_id());
    for change in changes {
        writeln!(out, "{} {}", change.transmitter_id(), change.new_power())?;
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), String> {
    if args.min_size < 1 || args.min_size > args.max_size {
        return Err(format!(
            "invalid size range {}..={}",
            args.min_size, args.max_size
        ));
    }
    if args.max_power < 0 {
        return Err(format!("invalid maximum power {}", args.max_power));
    }

    let generator = IslandGenerator::new()
        .size(args.min_size, args.max_size)
        .transmitters(1, args.max_transmitters.max(1))
        .receivers(1, args.max_receivers.max(1))
        .power(0, args.max_power);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let island = generator.generate(&mut rng);

    let stdout = io::stdout();
    write_island(&island, stdout.lock()).map_err(|e| e.to_string())
}
