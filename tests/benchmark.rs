use mc_bench::estimator::{run_trials, RunConfig};
use mc_bench::sampler::Domain;

#[test]
fn full_trial_loop_passes_the_self_check() {
    // Full 100-trial shape at a reduced budget so the suite stays fast.
    let config = RunConfig {
        workers: 4,
        samples: 100_000,
        trials: 100,
        epsilon: 0.01,
    };
    let report = run_trials(&Domain::default(), &config).unwrap();
    assert!(
        report.is_consistent(),
        "bad trials {}/{} vs bound {}",
        report.bad_trials,
        report.trials,
        report.bound
    );
}

#[test]
fn deterministic_seeding_makes_trials_unanimous() {
    // Every trial reseeds identically, so with a tolerance this tight the
    // trials must all agree on the verdict.
    let config = RunConfig {
        workers: 2,
        samples: 50_000,
        trials: 10,
        epsilon: 0.0001,
    };
    let report = run_trials(&Domain::default(), &config).unwrap();
    assert!(
        report.bad_trials == 0 || report.bad_trials == report.trials,
        "bad trials {}/{}",
        report.bad_trials,
        report.trials
    );
}

#[test]
#[ignore = "full one-million-point budget, slow in debug builds"]
fn default_budget_run_passes_the_self_check() {
    let report = run_trials(&Domain::default(), &RunConfig::new(4)).unwrap();
    assert!(
        report.is_consistent(),
        "bad trials {}/{} vs bound {}",
        report.bad_trials,
        report.trials,
        report.bound
    );
}
