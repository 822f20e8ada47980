#![deny(dead_code)]
#![deny(unused_imports)]

//! Simulation of the Bayesian trap.
//!
//! A [`Trap`] draws a synthetic cohort from a disease base rate and the error
//! rates of a diagnostic test, then reports how often a positive (or negative)
//! test result is actually right. With a rare disease and a noisy test the
//! positive diagnosis confidence is far lower than intuition suggests.

pub mod analytic;
pub mod generate;
pub mod model;
pub mod report;
pub mod stats;

pub use generate::{Individual, generate};
pub use model::{Rates, Trap, TrapConfig, TrapError};
pub use report::Summary;
pub use stats::{Statistic, Statistics};
