//! # Trap Model
//!
//! The `Trap` owns one simulation: the validated test parameters, the cohort
//! drawn from them, and the random stream that produced it. Parameters are
//! checked exactly once, when the trap is built, so everything downstream
//! (generation, statistics, reporting) may assume valid probabilities.

use crate::generate::{Individual, generate};
use crate::report::Summary;
use crate::stats::{Statistic, Statistics};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Errors raised while building a trap or reading statistics from its cohort.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrapError {
    #[error("Parameter '{name}' must be a probability between 0 and 1, but was {value}.")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("The {statistic} is undefined because the cohort has no {subset} individuals.")]
    EmptySubsetStatistic {
        statistic: &'static str,
        subset: &'static str,
    },
}

/// The three probabilities that define the population and the test.
///
/// Only constructible through [`Rates::new`], so a `Rates` value always holds
/// probabilities in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rates {
    base_rate: f64,
    false_positive_rate: f64,
    false_negative_rate: f64,
}

impl Rates {
    pub fn new(
        base_rate: f64,
        false_positive_rate: f64,
        false_negative_rate: f64,
    ) -> Result<Self, TrapError> {
        Ok(Self {
            base_rate: check_probability("base_rate", base_rate)?,
            false_positive_rate: check_probability("false_pos", false_positive_rate)?,
            false_negative_rate: check_probability("false_neg", false_negative_rate)?,
        })
    }

    /// True prevalence, P(disease).
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// P(positive test | no disease).
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// P(negative test | disease).
    pub fn false_negative_rate(&self) -> f64 {
        self.false_negative_rate
    }

    /// Probability that a diseased individual tests positive.
    pub fn sensitivity(&self) -> f64 {
        1.0 - self.false_negative_rate
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<f64, TrapError> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TrapError::InvalidParameter { name, value })
    }
}

/// Everything needed to build a [`Trap`], gathered from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct TrapConfig {
    pub sample_size: usize,
    pub base_rate: f64,
    pub false_positive_rate: f64,
    pub false_negative_rate: f64,
    /// Fixes the random stream. `None` draws a fresh realization each run.
    pub seed: Option<u64>,
}

impl TrapConfig {
    pub fn rates(&self) -> Result<Rates, TrapError> {
        Rates::new(
            self.base_rate,
            self.false_positive_rate,
            self.false_negative_rate,
        )
    }

    pub fn build(&self) -> Result<Trap, TrapError> {
        let rates = self.rates()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Trap::from_parts(self.sample_size, rates, rng))
    }
}

/// A simulation of the Bayesian trap over one synthetic cohort.
#[derive(Debug)]
pub struct Trap {
    sample_size: usize,
    rates: Rates,
    cohort: Vec<Individual>,
    rng: StdRng,
}

impl Trap {
    /// Builds a trap with an unseeded random stream and draws its first cohort.
    pub fn new(
        sample_size: usize,
        base_rate: f64,
        false_positive_rate: f64,
        false_negative_rate: f64,
    ) -> Result<Self, TrapError> {
        let rates = Rates::new(base_rate, false_positive_rate, false_negative_rate)?;
        Ok(Self::from_parts(sample_size, rates, StdRng::from_os_rng()))
    }

    /// Builds a reproducible trap. Two traps with the same seed and parameters
    /// draw identical cohorts, and identical cohorts again after each resample.
    pub fn with_seed(sample_size: usize, rates: Rates, seed: u64) -> Self {
        Self::from_parts(sample_size, rates, StdRng::seed_from_u64(seed))
    }

    fn from_parts(sample_size: usize, rates: Rates, mut rng: StdRng) -> Self {
        let cohort = generate(sample_size, &rates, &mut rng);
        Self {
            sample_size,
            rates,
            cohort,
            rng,
        }
    }

    /// Discards the current cohort and draws a fresh one under the same
    /// parameters, continuing this trap's random stream.
    pub fn resample(&mut self) {
        self.cohort = generate(self.sample_size, &self.rates, &mut self.rng);
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    pub fn cohort(&self) -> &[Individual] {
        &self.cohort
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_cohort(&self.cohort)
    }

    /// Empirical base rate, false positive rate and false negative rate.
    pub fn observe(&self) -> (Statistic, Statistic, Statistic) {
        let stats = self.statistics();
        (
            stats.empirical_base_rate,
            stats.empirical_false_positive,
            stats.empirical_false_negative,
        )
    }

    /// Empirical P(disease | positive test).
    pub fn diagnose_positive(&self) -> Statistic {
        self.statistics().diagnose_positive
    }

    /// Empirical P(disease | negative test).
    pub fn diagnose_negative(&self) -> Statistic {
        self.statistics().diagnose_negative
    }

    pub fn summarize(&self) -> Summary {
        Summary::new(self.sample_size, &self.statistics())
    }
}
