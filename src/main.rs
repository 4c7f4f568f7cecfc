use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mc_bench::estimator::{run_trials, RunConfig};
use mc_bench::sampler::Domain;

/// Concurrent Monte Carlo benchmark: estimates the unit-circle area inside a
/// bounding rectangle and checks the estimator against its theoretical error
/// bound.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of concurrent sampling workers.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    workers: u32,

    /// Target number of sample points per trial.
    #[arg(long, default_value_t = 1_000_000)]
    samples: u64,

    /// Number of estimation trials.
    #[arg(long, default_value_t = 100)]
    trials: u32,

    /// Maximum tolerated deviation between estimate and truth per trial.
    #[arg(long, default_value_t = 0.001)]
    epsilon: f64,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the two result lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RunConfig {
        workers: cli.workers as usize,
        samples: cli.samples,
        trials: cli.trials,
        epsilon: cli.epsilon,
    };
    let domain = Domain::default();

    info!(
        workers = config.workers,
        samples = config.samples,
        trials = config.trials,
        epsilon = config.epsilon,
        "starting benchmark"
    );

    let report = run_trials(&domain, &config).context("benchmark run failed")?;

    println!(
        "Average runtime of monte_carlo run: {:.3} ms",
        report.avg_runtime_ms()
    );
    if report.is_consistent() {
        println!("The estimation is correct");
    } else {
        println!("Something went wrong...");
    }

    Ok(())
}
