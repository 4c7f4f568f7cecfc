use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Error;

/// Sampling rectangle: two half-open intervals, shared read-only by all
/// workers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Domain {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Domain { x, y }
    }

    /// Rectangle area.
    pub fn area(&self) -> f64 {
        (self.x.1 - self.x.0) * (self.y.1 - self.y.0)
    }
}

impl Default for Domain {
    /// The `[-1, 1) x [0, 1)` rectangle bounding the upper half of the unit
    /// circle.
    fn default() -> Self {
        Domain::new((-1.0, 1.0), (0.0, 1.0))
    }
}

/// Samples each worker draws: integer split plus one, so the pool slightly
/// oversamples whenever `workers` does not divide `samples`.
pub fn per_worker_budget(samples: u64, workers: usize) -> u64 {
    samples / workers as u64 + 1
}

/// Points actually drawn by a pool of `workers` workers.
pub fn points_drawn(samples: u64, workers: usize) -> u64 {
    workers as u64 * per_worker_budget(samples, workers)
}

/// Counts how many of roughly `samples` random points in `domain` fall inside
/// the unit circle, split across `workers` threads.
///
/// Worker `i` seeds its own generator with `i`, so the count is reproducible
/// for a fixed worker count. Each worker folds its local hit count into the
/// shared total with a single atomic add, and the pool joins every worker
/// before reading the total.
pub fn sample_region(domain: &Domain, workers: usize, samples: u64) -> Result<u64, Error> {
    if workers == 0 {
        return Err(Error::ZeroWorkers);
    }

    let budget = per_worker_budget(samples, workers);
    let total_hits = Arc::new(AtomicU64::new(0));

    let mut handles = Vec::with_capacity(workers);

    for worker_id in 0..workers {
        let total_hits = Arc::clone(&total_hits);
        let domain = *domain;

        handles.push(thread::spawn(move || {
            let hits = count_hits(&domain, worker_id as u64, budget);
            total_hits.fetch_add(hits, Ordering::Relaxed);
        }));
    }

    for handle in handles {
        handle.join().expect("sampler worker panicked");
    }

    Ok(total_hits.load(Ordering::Relaxed))
}

// One worker's loop: `budget` uniform draws, counting points with
// x^2 + y^2 <= 1. No shared state; the caller merges the returned count.
fn count_hits(domain: &Domain, seed: u64, budget: u64) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist_x = Uniform::new(domain.x.0, domain.x.1);
    let dist_y = Uniform::new(domain.y.0, domain.y.1);

    let mut hits = 0;

    for _ in 0..budget {
        let x = dist_x.sample(&mut rng);
        let y = dist_y.sample(&mut rng);

        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    hits
}
