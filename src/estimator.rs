use std::f64::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::Error;
use crate::sampler::{self, Domain};

/// Area of the unit-circle slice inside the default sampling rectangle.
pub const TARGET_AREA: f64 = FRAC_PI_2;

/// Knobs for one benchmark run, passed explicitly so tests can shrink the
/// budget.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Concurrent sampling workers per trial.
    pub workers: usize,
    /// Target sample budget per trial; each worker draws
    /// `samples / workers + 1` of it.
    pub samples: u64,
    /// Independent estimation trials.
    pub trials: u32,
    /// Maximum tolerated |truth - estimate| for a trial to count as good.
    pub epsilon: f64,
}

impl RunConfig {
    /// Default benchmark shape: one million points, one hundred trials,
    /// tolerance 0.001.
    pub fn new(workers: usize) -> Self {
        RunConfig {
            workers,
            samples: 1_000_000,
            trials: 100,
            epsilon: 0.001,
        }
    }
}

/// Outcome of a full run: timing plus the statistical self-check inputs.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub trials: u32,
    pub bad_trials: u32,
    /// Chebyshev bound on the probability that a single trial deviates by
    /// more than epsilon.
    pub bound: f64,
    pub avg_runtime: Duration,
}

impl Report {
    /// Whether the observed bad-trial fraction is consistent with the
    /// theoretical bound.
    pub fn is_consistent(&self) -> bool {
        f64::from(self.bad_trials) / f64::from(self.trials) <= self.bound
    }

    pub fn avg_runtime_ms(&self) -> f64 {
        self.avg_runtime.as_secs_f64() * 1_000.0
    }
}

// Chebyshev bound on P(|estimate - truth| >= epsilon) for the mean of `drawn`
// indicator draws with hit probability `p`.
fn chebyshev_bound(p: f64, drawn: u64, epsilon: f64) -> f64 {
    p * (1.0 - p) / (drawn as f64 * epsilon * epsilon)
}

/// Runs `config.trials` sampling passes over `domain` and judges the
/// estimator.
///
/// A trial is bad when its hit-fraction estimate deviates from the true
/// fraction by more than `config.epsilon`; the run as a whole passes when
/// the observed bad fraction stays within the Chebyshev bound for the drawn
/// sample size.
pub fn run_trials(domain: &Domain, config: &RunConfig) -> Result<Report, Error> {
    if config.workers == 0 {
        return Err(Error::ZeroWorkers);
    }

    let drawn = sampler::points_drawn(config.samples, config.workers);
    let truth = TARGET_AREA / domain.area();

    let mut bad_trials = 0u32;
    let mut total_time = Duration::ZERO;

    for trial in 0..config.trials {
        let start = Instant::now();
        let hits = sampler::sample_region(domain, config.workers, config.samples)?;
        total_time += start.elapsed();

        let estimate = hits as f64 / drawn as f64;
        let deviation = (truth - estimate).abs();
        debug!(trial, hits, estimate, deviation, "trial finished");

        if deviation > config.epsilon {
            bad_trials += 1;
        }
    }

    let report = Report {
        trials: config.trials,
        bad_trials,
        bound: chebyshev_bound(truth, drawn, config.epsilon),
        avg_runtime: total_time
            .checked_div(config.trials)
            .unwrap_or(Duration::ZERO),
    };

    if !report.is_consistent() {
        warn!(
            bad_trials = report.bad_trials,
            bound = report.bound,
            "bad-trial fraction exceeded the theoretical bound"
        );
    }

    Ok(report)
}
