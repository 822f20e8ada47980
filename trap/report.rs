//! Reporter: the six figures a run prints, in a fixed order.

use crate::stats::{Statistic, Statistics};
use std::fmt;

/// Rendered in place of a statistic whose subset was empty.
pub const UNDEFINED: &str = "undefined";

/// Field labels, in report order.
pub const LABELS: [&str; 6] = [
    "sample size",
    "empirical base rate",
    "empirical false positive",
    "empirical false negative",
    "positive diagnosis confidence",
    "negative diagnosis confidence",
];

/// The report of one trap: sample size, the three empirical rates and the two
/// diagnosis confidences.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub sample_size: usize,
    pub empirical_base_rate: Statistic,
    pub empirical_false_positive: Statistic,
    pub empirical_false_negative: Statistic,
    /// P(disease | positive test).
    pub positive_confidence: Statistic,
    /// P(no disease | negative test).
    pub negative_confidence: Statistic,
}

impl Summary {
    pub fn new(sample_size: usize, stats: &Statistics) -> Self {
        Self {
            sample_size,
            empirical_base_rate: stats.empirical_base_rate.clone(),
            empirical_false_positive: stats.empirical_false_positive.clone(),
            empirical_false_negative: stats.empirical_false_negative.clone(),
            positive_confidence: stats.diagnose_positive.clone(),
            negative_confidence: stats.negative_confidence(),
        }
    }

    /// Label/value pairs in report order, values already formatted.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.sample_size.to_string(),
            format_statistic(&self.empirical_base_rate),
            format_statistic(&self.empirical_false_positive),
            format_statistic(&self.empirical_false_negative),
            format_statistic(&self.positive_confidence),
            format_statistic(&self.negative_confidence),
        ];
        LABELS.into_iter().zip(values).collect()
    }
}

fn format_statistic(stat: &Statistic) -> String {
    match stat {
        Ok(value) => {
            let mut buffer = ryu::Buffer::new();
            buffer.format(*value).to_owned()
        }
        Err(_) => UNDEFINED.to_owned(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (label, value)) in self.entries().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
