//! Concurrent Monte Carlo estimation of the unit-circle area inside a
//! bounding rectangle, with a repeated-trial statistical self-check.

pub mod error;
pub mod estimator;
pub mod sampler;

pub use error::Error;
