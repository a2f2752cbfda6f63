use std::fmt;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Deck, HandCategory, PokerMathError, holdem_best};

/// Counts of the best hand category across random seven card deals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryHistogram {
    counts: [usize; 10],
    trials: usize,
}

impl CategoryHistogram {
    pub fn record(&mut self, category: HandCategory) {
        self.counts[category.ordinal() as usize] += 1;
        self.trials += 1;
    }

    pub fn count(&self, category: HandCategory) -> usize {
        self.counts[category.ordinal() as usize]
    }

    /// Fraction of the deals that ended up as `category`.
    pub fn frequency(&self, category: HandCategory) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.trials as f64
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Every category with its count, weakest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (HandCategory, usize)> + '_ {
        HandCategory::all()
            .into_iter()
            .map(|category| (category, self.count(category)))
    }
}

impl fmt::Display for CategoryHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, count) in self.iter().rev() {
            writeln!(
                f,
                "{:<16} {:>10} {:>9.5}%",
                category.name(),
                count,
                100.0 * self.frequency(category)
            )?;
        }
        write!(f, "{:<16} {:>10}", "Total", self.trials)
    }
}

/// Deal `trials` random seven card hands from a full deck and count the
/// category of the best five cards in each.
pub fn category_histogram<R: Rng + ?Sized>(
    trials: usize,
    rng: &mut R,
) -> Result<CategoryHistogram, PokerMathError> {
    let span = trace_span!("category_histogram", trials);
    let _enter = span.enter();

    let mut histogram = CategoryHistogram::default();
    for _ in 0..trials {
        let mut deck = Deck::default();
        let cards = deck.deal_many(7, rng)?;
        histogram.record(holdem_best(&cards)?.category());
    }

    event!(Level::DEBUG, ?histogram, "category_histogram_done");
    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_counts_sum_to_trials() {
        let mut rng = StdRng::seed_from_u64(420);
        let histogram = category_histogram(1_000, &mut rng).unwrap();
        assert_eq!(1_000, histogram.trials());
        assert_eq!(1_000, histogram.iter().map(|(_, c)| c).sum::<usize>());
    }

    #[test_log::test]
    fn test_seven_card_frequencies() {
        let mut rng = StdRng::seed_from_u64(7);
        let histogram = category_histogram(20_000, &mut rng).unwrap();

        // One pair is the most common best hand at about 43.8%.
        let most_common = histogram.iter().max_by_key(|(_, c)| *c).unwrap().0;
        assert_eq!(HandCategory::OnePair, most_common);
        assert_abs_diff_eq!(
            0.438,
            histogram.frequency(HandCategory::OnePair),
            epsilon = 0.02
        );
        // Two pair about 23.5%, high card about 17.4%.
        assert_abs_diff_eq!(
            0.235,
            histogram.frequency(HandCategory::TwoPair),
            epsilon = 0.02
        );
        assert_abs_diff_eq!(
            0.174,
            histogram.frequency(HandCategory::HighCard),
            epsilon = 0.02
        );
    }

    #[test]
    fn test_empty() {
        let histogram = CategoryHistogram::default();
        assert_eq!(0.0, histogram.frequency(HandCategory::Flush));
        assert!(histogram.to_string().contains("Royal"));
    }
}
