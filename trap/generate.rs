//! Population generator: draws a synthetic cohort and applies the test to it.

use crate::model::Rates;
use rand::Rng;

/// One synthetic person and the outcome of their test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Individual {
    /// Position in generation order, starting at 0.
    pub id: usize,
    pub has_disease: bool,
    pub tested_positive: bool,
}

/// Draws `n` independent individuals.
///
/// Disease status is a Bernoulli trial with parameter `base_rate`. The test
/// result is a second trial whose parameter depends on the status: the
/// sensitivity `1 - false_negative_rate` for the diseased, the
/// `false_positive_rate` for everyone else. Each trial compares a uniform draw
/// from `[0, 1)` against its parameter, so a rate of 0 never fires and a rate
/// of 1 always does.
pub fn generate<R: Rng>(n: usize, rates: &Rates, rng: &mut R) -> Vec<Individual> {
    let cohort: Vec<Individual> = (0..n)
        .map(|id| {
            let has_disease = rng.random::<f64>() < rates.base_rate();
            let positive_probability = if has_disease {
                rates.sensitivity()
            } else {
                rates.false_positive_rate()
            };
            let tested_positive = rng.random::<f64>() < positive_probability;
            Individual {
                id,
                has_disease,
                tested_positive,
            }
        })
        .collect();

    log::debug!(
        "Generated cohort of {} individuals ({} diseased, {} tested positive)",
        cohort.len(),
        cohort.iter().filter(|p| p.has_disease).count(),
        cohort.iter().filter(|p| p.tested_positive).count()
    );

    cohort
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rates(base: f64, fp: f64, fneg: f64) -> Rates {
        Rates::new(base, fp, fneg).unwrap()
    }

    #[test]
    fn empty_cohort_for_zero_individuals() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(0, &rates(0.5, 0.5, 0.5), &mut rng).is_empty());
    }

    #[test]
    fn ids_follow_generation_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let cohort = generate(257, &rates(0.2, 0.1, 0.1), &mut rng);
        assert_eq!(cohort.len(), 257);
        for (index, person) in cohort.iter().enumerate() {
            assert_eq!(person.id, index);
        }
    }

    #[test]
    fn certain_and_impossible_rates_are_exact() {
        let mut rng = StdRng::seed_from_u64(5);

        let everyone_sick = generate(1000, &rates(1.0, 1.0, 0.0), &mut rng);
        assert!(
            everyone_sick
                .iter()
                .all(|p| p.has_disease && p.tested_positive)
        );

        let nobody_sick = generate(1000, &rates(0.0, 0.0, 1.0), &mut rng);
        assert!(
            nobody_sick
                .iter()
                .all(|p| !p.has_disease && !p.tested_positive)
        );
    }

    #[test]
    fn missed_cases_follow_false_negative_rate() {
        // Every diseased individual is missed by a test with a false negative rate of 1.
        let mut rng = StdRng::seed_from_u64(8);
        let cohort = generate(2000, &rates(0.5, 0.0, 1.0), &mut rng);
        assert!(cohort.iter().any(|p| p.has_disease));
        assert!(cohort.iter().all(|p| !p.tested_positive));
    }
}
