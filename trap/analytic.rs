//! Closed-form posteriors from Bayes' theorem.
//!
//! These are what the empirical diagnosis confidences converge to as the
//! sample grows. They use only the given parameters, never the cohort.

use crate::model::Rates;

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

impl Rates {
    /// P(disease | positive) = b(1 - fn) / (b(1 - fn) + (1 - b)fp).
    ///
    /// `None` when no one can test positive.
    pub fn positive_predictive_value(&self) -> Option<f64> {
        let true_positive = self.base_rate() * self.sensitivity();
        let false_positive = (1.0 - self.base_rate()) * self.false_positive_rate();
        ratio(true_positive, true_positive + false_positive)
    }

    /// P(no disease | negative) = (1 - b)(1 - fp) / ((1 - b)(1 - fp) + b fn).
    ///
    /// `None` when no one can test negative.
    pub fn negative_predictive_value(&self) -> Option<f64> {
        let true_negative = (1.0 - self.base_rate()) * (1.0 - self.false_positive_rate());
        let false_negative = self.base_rate() * self.false_negative_rate();
        ratio(true_negative, true_negative + false_negative)
    }
}
