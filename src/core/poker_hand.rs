use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{Card, Hand, HandCategory, PokerMathError, Value};

/// Everything needed to compare two five card hands.
///
/// The category decides first. Within a category the kickers are compared
/// in order. Kickers are the distinct values of the hand sorted by how many
/// times they appear and then by value, both descending. Unused slots are
/// zero. Two hands of the same category always have the same shape, so the
/// padding never decides anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandStrength {
    pub category: HandCategory,
    pub kickers: [u8; 5],
}

/// Exactly five distinct cards, ranked.
///
/// Ordering and equality compare showdown strength, not the cards. Two
/// hands that would split a pot are equal even when their suits differ. Use
/// `cards()` when the identity of the cards matters.
///
/// ```
/// use poker_math::core::{HandCategory, PokerHand};
///
/// let kings_full: PokerHand = "KS KH KD AS AH".parse().unwrap();
/// let aces_full: PokerHand = "AS AH AD KS KH".parse().unwrap();
///
/// assert_eq!(HandCategory::FullHouse, kings_full.category());
/// assert!(aces_full > kings_full);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PokerHand {
    /// Sorted ascending.
    cards: [Card; 5],
    /// (value, count) sorted by count then value, both descending.
    groups: [(u8, u8); 5],
    num_groups: usize,
    strength: HandStrength,
}

impl PokerHand {
    /// Rank five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, PokerMathError> {
        let mut hand: [Card; 5] = match cards.try_into() {
            Ok(h) => h,
            Err(_) => return Err(PokerMathError::InvalidHandSize(cards.len())),
        };
        hand.sort();
        if let Some(w) = hand.windows(2).find(|w| w[0] == w[1]) {
            return Err(PokerMathError::DuplicateCard(w[0]));
        }

        // Indexed by face value, so slots 0 and 1 stay empty.
        let mut value_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for c in &hand {
            value_counts[usize::from(c.rank())] += 1;
            suit_counts[c.suit as usize] += 1;
        }

        let category = categorize(&value_counts, &suit_counts);
        let ace_low = category.is_straight()
            && value_counts[Value::Ace as usize] > 0
            && value_counts[Value::Five as usize] > 0;

        let mut groups = [(0u8, 0u8); 5];
        let mut num_groups = 0;
        for (value, &count) in value_counts.iter().enumerate().rev() {
            if count == 0 {
                continue;
            }
            // The ace plays as a one in the wheel.
            let value = if ace_low && value == Value::Ace as usize {
                1
            } else {
                value as u8
            };
            groups[num_groups] = (value, count);
            num_groups += 1;
        }
        groups[..num_groups].sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let mut kickers = [0u8; 5];
        for (k, g) in kickers.iter_mut().zip(&groups[..num_groups]) {
            *k = g.0;
        }

        Ok(Self {
            cards: hand,
            groups,
            num_groups,
            strength: HandStrength { category, kickers },
        })
    }

    pub fn category(&self) -> HandCategory {
        self.strength.category
    }

    pub fn strength(&self) -> HandStrength {
        self.strength
    }

    /// The cards in this hand, lowest first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The distinct values in tie break order. An ace that plays low in a
    /// wheel shows up as 1.
    pub fn kickers(&self) -> &[u8] {
        &self.strength.kickers[..self.num_groups]
    }

    /// `(value, count)` pairs in tie break order.
    pub fn priority_list(&self) -> &[(u8, u8)] {
        &self.groups[..self.num_groups]
    }

    /// Is this the five high straight, A-2-3-4-5?
    pub fn is_wheel(&self) -> bool {
        self.strength.category.is_straight() && self.strength.kickers[4] == 1
    }

    /// Compare the showdown strength of two hands.
    pub fn compare(&self, other: &PokerHand) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

/// Classify a hand from its value and suit counts.
///
/// The checks run from the strongest category down and the first one that
/// holds wins. Some checks lean on the earlier ones having failed, three of
/// a kind is only reached when the hand is not a full house for example, so
/// the order must stay as is.
fn categorize(value_counts: &[u8; 15], suit_counts: &[u8; 4]) -> HandCategory {
    let distinct = value_counts.iter().filter(|&&c| c > 0).count();
    let max_count = value_counts.iter().copied().max().unwrap_or(0);
    let min_count = value_counts
        .iter()
        .copied()
        .filter(|&c| c > 0)
        .min()
        .unwrap_or(0);
    let min_value = value_counts.iter().position(|&c| c > 0).unwrap_or(0);
    let max_value = value_counts.iter().rposition(|&c| c > 0).unwrap_or(0);

    let is_flush = suit_counts.iter().filter(|&&c| c > 0).count() == 1;
    let is_wheel = [Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five]
        .iter()
        .all(|&v| value_counts[v as usize] > 0);
    let is_straight = (distinct == 5 && max_value - min_value == 4) || is_wheel;

    if is_straight && is_flush && min_value == Value::Ten as usize {
        HandCategory::RoyalFlush
    } else if is_straight && is_flush {
        HandCategory::StraightFlush
    } else if max_count == 4 {
        HandCategory::FourOfAKind
    } else if max_count == 3 && min_count == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if max_count == 3 {
        HandCategory::ThreeOfAKind
    } else if max_count == 2 && distinct == 3 {
        HandCategory::TwoPair
    } else if max_count == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}

impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for PokerHand {}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl TryFrom<&[Card]> for PokerHand {
    type Error = PokerMathError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        PokerHand::new(cards)
    }
}

impl FromStr for PokerHand {
    type Err = PokerMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hand = Hand::new_from_str(s)?;
        PokerHand::new(&hand[..])
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    fn hand(s: &str) -> PokerHand {
        s.parse().unwrap()
    }

    fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
        if cards.len() <= 1 {
            return vec![cards.to_vec()];
        }
        let mut out = vec![];
        for i in 0..cards.len() {
            let mut rest = cards.to_vec();
            let first = rest.remove(i);
            for mut p in permutations(&rest) {
                p.insert(0, first);
                out.push(p);
            }
        }
        out
    }

    fn random_hand(rng: &mut StdRng) -> PokerHand {
        let mut deck = Deck::default();
        let cards = deck.deal_many(5, rng).unwrap();
        PokerHand::new(&cards).unwrap()
    }

    #[test]
    fn test_wrong_size() {
        let h = Hand::new_from_str("AsKsQsJs").unwrap();
        assert_eq!(
            Err(PokerMathError::InvalidHandSize(4)),
            PokerHand::new(&h[..]).map(|_| ())
        );
        let h = Hand::new_from_str("AsKsQsJsTs9s").unwrap();
        assert_eq!(
            Err(PokerMathError::InvalidHandSize(6)),
            PokerHand::new(&h[..]).map(|_| ())
        );
    }

    #[test]
    fn test_duplicate_card() {
        let c = Card::new(Value::Ace, Suit::Spade);
        let cards = vec![
            c,
            c,
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Queen, Suit::Spade),
            Card::new(Value::Jack, Suit::Spade),
        ];
        assert_eq!(
            Err(PokerMathError::DuplicateCard(c)),
            PokerHand::new(&cards).map(|_| ())
        );
    }

    #[test]
    fn test_high_card_hand() {
        let h = hand("AD 8H 9C TC 5C");
        assert_eq!(HandCategory::HighCard, h.category());
        assert_eq!(&[14, 10, 9, 8, 5], h.kickers());
    }

    #[test]
    fn test_one_pair() {
        let h = hand("AD AC 9D 8C TS");
        assert_eq!(HandCategory::OnePair, h.category());
        assert_eq!(&[14, 10, 9, 8], h.kickers());
    }

    #[test]
    fn test_two_pair() {
        let h = hand("AD AC 9D 9C TS");
        assert_eq!(HandCategory::TwoPair, h.category());
        assert_eq!(&[14, 9, 10], h.kickers());
    }

    #[test]
    fn test_three_of_a_kind() {
        let h = hand("2C 2S 2H 5S 6D");
        assert_eq!(HandCategory::ThreeOfAKind, h.category());
        assert_eq!(&[(2, 3), (6, 1), (5, 1)], h.priority_list());
    }

    #[test]
    fn test_straight() {
        let h = hand("2C 3S 4H 5S 6D");
        assert_eq!(HandCategory::Straight, h.category());
        assert!(!h.is_wheel());
    }

    #[test]
    fn test_flush() {
        let h = hand("AD 8D 9D TD 5D");
        assert_eq!(HandCategory::Flush, h.category());
    }

    #[test]
    fn test_full_house() {
        let h = hand("AD AC 9D 9C 9S");
        assert_eq!(HandCategory::FullHouse, h.category());
        assert_eq!(&[(9, 3), (14, 2)], h.priority_list());
    }

    #[test]
    fn test_four_of_a_kind() {
        let h = hand("AD AC AS AH TS");
        assert_eq!(HandCategory::FourOfAKind, h.category());
        assert_eq!(&[14, 10], h.kickers());
    }

    #[test]
    fn test_straight_flush() {
        let h = hand("9H TH JH QH KH");
        assert_eq!(HandCategory::StraightFlush, h.category());
    }

    #[test]
    fn test_royal_flush_is_max() {
        let royal = hand("TS JS QS KS AS");
        assert_eq!(HandCategory::RoyalFlush, royal.category());
        assert_eq!(9, royal.category().ordinal());

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            assert!(royal >= random_hand(&mut rng));
        }
        assert!(royal > hand("9H TH JH QH KH"));
        // Only suits differ so the pot is split.
        assert_eq!(royal, hand("TD JD QD KD AD"));
    }

    #[test]
    fn test_wheel() {
        let wheel = hand("AD 2C 3S 4H 5S");
        assert_eq!(HandCategory::Straight, wheel.category());
        assert!(wheel.is_wheel());
        assert_eq!(&[5, 4, 3, 2, 1], wheel.kickers());

        assert!(wheel < hand("2C 3S 4H 5S 6D"));
        assert!(wheel > hand("AD AC AS 4H 5S"));
        assert!(wheel > hand("KD KC KS QH JS"));
    }

    #[test]
    fn test_steel_wheel() {
        let wheel = hand("AS 2S 3S 4S 5S");
        // The ace is low so this is not a royal flush.
        assert_eq!(HandCategory::StraightFlush, wheel.category());
        assert!(wheel.is_wheel());
        assert!(wheel < hand("2S 3S 4S 5S 6S"));
        assert!(wheel > hand("AD AC AS AH KS"));
    }

    #[test]
    fn test_ace_high_is_not_a_straight() {
        // Around the corner straights don't count.
        let h = hand("QD KC AS 2H 3S");
        assert_eq!(HandCategory::HighCard, h.category());
        assert_eq!(&[14, 13, 12, 3, 2], h.kickers());
    }

    #[test]
    fn test_ace_stays_high_in_pair() {
        let h = hand("AD 5C 5S 4H 3S");
        assert_eq!(HandCategory::OnePair, h.category());
        assert_eq!(&[5, 14, 4, 3], h.kickers());
    }

    #[test]
    fn test_kicker_breaks_tie() {
        assert!(hand("AD AC KS 4H 3S") > hand("AH AS QS JH TS"));
        assert!(hand("AD AC 9S 9H 3S") > hand("AH AS 8S 8H KS"));
        assert!(hand("AD AC 9S 9H 4S") > hand("AH AS 9D 9C 3S"));
        assert!(hand("AS AH AD KS KH") > hand("KD KC KS AC AH"));
        assert!(hand("5D 5C 5S 5H 3S") > hand("4H 4S 4D 4C AS"));
        assert!(hand("AD KD 9D 8D 3D") > hand("AH QH JH TH 8H"));
    }

    #[test]
    fn test_split() {
        let a = hand("AD KC 9S 8H 3S");
        let b = hand("AS KD 9C 8D 3H");
        assert_eq!(Ordering::Equal, a.compare(&b));
        assert_eq!(a, b);
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn test_category_ignores_order() {
        for s in [
            "AD 2C 3S 4H 5S",
            "AS AH AD KS KH",
            "9H TH JH QH KH",
            "AD AC 9D 9C TS",
            "AD 8D 9D TD 5D",
        ] {
            let h = Hand::new_from_str(s).unwrap();
            let expected = hand(s);
            for p in permutations(&h[..]) {
                let other = PokerHand::new(&p).unwrap();
                assert_eq!(expected.category(), other.category());
                assert_eq!(expected.strength(), other.strength());
            }
        }
    }

    #[test]
    fn test_total_order() {
        let mut rng = StdRng::seed_from_u64(420);
        for _ in 0..1_500 {
            let a = random_hand(&mut rng);
            let b = random_hand(&mut rng);
            let c = random_hand(&mut rng);

            assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            assert_eq!(Ordering::Equal, a.cmp(&a));
            if a <= b && b <= c {
                assert!(a <= c);
            }
            if a >= b && b >= c {
                assert!(a >= c);
            }
            // Category always decides first.
            if a.category() != b.category() {
                assert_eq!(a.category().cmp(&b.category()), a.cmp(&b));
            }
        }
    }

    #[test]
    fn test_display() {
        let h = hand("AS 2C TD 9H KS");
        assert_eq!("2C 9H TD KS AS", h.to_string());
        assert_eq!(h.cards(), hand(&h.to_string()).cards());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_strength_serde() {
        let s = hand("AS AH AD KS KH").strength();
        let json = serde_json::to_string(&s).unwrap();
        let back: HandStrength = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
