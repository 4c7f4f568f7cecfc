use thiserror::Error;

/// Errors surfaced by the sampling kernel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The per-worker budget divides by the worker count, so zero workers is
    /// rejected up front instead of reaching that division.
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}
