//! # Statistics Engine
//!
//! Every statistic is a proportion over some subset of the cohort: the whole
//! cohort, the diseased, the healthy, those who tested positive, or those who
//! tested negative. A single pass tallies the four cells of the
//! disease-by-test contingency table, and each statistic is then a ratio of
//! cell sums.
//!
//! A subset can be empty (an empty cohort, or a base rate of exactly 0 or 1).
//! The affected statistic then carries `TrapError::EmptySubsetStatistic`
//! instead of a number, and the remaining statistics are still computed.

use crate::generate::Individual;
use crate::model::TrapError;

/// A proportion, or the reason it could not be computed.
pub type Statistic = Result<f64, TrapError>;

/// Counts of the disease-by-test contingency table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    true_positive: usize,
    false_negative: usize,
    false_positive: usize,
    true_negative: usize,
}

impl Tally {
    fn from_cohort(cohort: &[Individual]) -> Self {
        cohort.iter().fold(Self::default(), |mut tally, person| {
            match (person.has_disease, person.tested_positive) {
                (true, true) => tally.true_positive += 1,
                (true, false) => tally.false_negative += 1,
                (false, true) => tally.false_positive += 1,
                (false, false) => tally.true_negative += 1,
            }
            tally
        })
    }

    fn diseased(&self) -> usize {
        self.true_positive + self.false_negative
    }

    fn healthy(&self) -> usize {
        self.false_positive + self.true_negative
    }

    fn positive(&self) -> usize {
        self.true_positive + self.false_positive
    }

    fn negative(&self) -> usize {
        self.false_negative + self.true_negative
    }

    fn total(&self) -> usize {
        self.diseased() + self.healthy()
    }
}

fn proportion(
    hits: usize,
    subset_size: usize,
    statistic: &'static str,
    subset: &'static str,
) -> Statistic {
    if subset_size == 0 {
        log::warn!("{statistic} is undefined: no {subset} individuals in the cohort");
        return Err(TrapError::EmptySubsetStatistic { statistic, subset });
    }
    Ok(hits as f64 / subset_size as f64)
}

/// The empirical rates and posteriors of one cohort.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    /// Share of the cohort with the disease.
    pub empirical_base_rate: Statistic,
    /// Share of healthy individuals who tested positive.
    pub empirical_false_positive: Statistic,
    /// Share of diseased individuals who tested negative.
    pub empirical_false_negative: Statistic,
    /// Share of positive tests that belong to diseased individuals,
    /// the empirical P(disease | positive).
    pub diagnose_positive: Statistic,
    /// Share of negative tests that belong to diseased individuals,
    /// the empirical P(disease | negative).
    pub diagnose_negative: Statistic,
}

impl Statistics {
    pub fn from_cohort(cohort: &[Individual]) -> Self {
        let tally = Tally::from_cohort(cohort);
        log::debug!("Contingency tally: {tally:?}");

        Self {
            empirical_base_rate: proportion(
                tally.diseased(),
                tally.total(),
                "empirical base rate",
                "sampled",
            ),
            empirical_false_positive: proportion(
                tally.false_positive,
                tally.healthy(),
                "empirical false positive",
                "healthy",
            ),
            empirical_false_negative: proportion(
                tally.false_negative,
                tally.diseased(),
                "empirical false negative",
                "diseased",
            ),
            diagnose_positive: proportion(
                tally.true_positive,
                tally.positive(),
                "positive diagnosis confidence",
                "positively tested",
            ),
            diagnose_negative: proportion(
                tally.false_negative,
                tally.negative(),
                "negative diagnosis confidence",
                "negatively tested",
            ),
        }
    }

    /// Empirical P(no disease | negative), the confidence a negative test earns.
    pub fn negative_confidence(&self) -> Statistic {
        self.diagnose_negative.clone().map(|p| 1.0 - p)
    }
}
