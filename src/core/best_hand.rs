use super::{Card, Combinations, PokerHand, PokerMathError};

/// Fail with the first card that shows up twice.
fn check_distinct(cards: &[Card]) -> Result<(), PokerMathError> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(PokerMathError::DuplicateCard(w[0])),
        None => Ok(()),
    }
}

/// Keep the candidate only when it is strictly better, so among hands of
/// equal strength the first one enumerated wins.
#[inline]
fn keep_best(best: &mut Option<PokerHand>, candidate: PokerHand) {
    if best.is_none_or(|b| candidate > b) {
        *best = Some(candidate);
    }
}

/// Try every way of leaving out `pool.len() - 5` cards.
fn best_excluding(pool: &[Card]) -> Result<PokerHand, PokerMathError> {
    let mut exclusions = Combinations::new(pool.len(), pool.len() - 5);
    let mut kept = [pool[0]; 5];
    let mut best = None;

    while let Some(excluded) = exclusions.next_combination() {
        let mut skip = excluded.iter().peekable();
        let mut n = 0;
        for (i, c) in pool.iter().enumerate() {
            if skip.peek() == Some(&&i) {
                skip.next();
                continue;
            }
            kept[n] = *c;
            n += 1;
        }
        keep_best(&mut best, PokerHand::new(&kept)?);
    }

    best.ok_or(PokerMathError::InvalidHandSize(pool.len()))
}

/// The best five card hand that can be made out of any 5 to 9 distinct
/// cards.
///
/// ```
/// use poker_math::core::{HandCategory, Hand, best_five};
///
/// let pool = Hand::new_from_str("AsKsQsJsTs2c3d").unwrap();
/// let best = best_five(&pool[..]).unwrap();
///
/// assert_eq!(HandCategory::RoyalFlush, best.category());
/// ```
pub fn best_five(pool: &[Card]) -> Result<PokerHand, PokerMathError> {
    if !(5..=9).contains(&pool.len()) {
        return Err(PokerMathError::InvalidPoolSize {
            expected: "5 to 9",
            found: pool.len(),
        });
    }
    check_distinct(pool)?;
    best_excluding(pool)
}

/// Best hand out of a Texas Holdem pool, 2 hole cards plus 5 on the board.
/// Looks at all 21 five card subsets.
pub fn holdem_best(pool: &[Card]) -> Result<PokerHand, PokerMathError> {
    if pool.len() != 7 {
        return Err(PokerMathError::InvalidPoolSize {
            expected: "7",
            found: pool.len(),
        });
    }
    check_distinct(pool)?;
    best_excluding(pool)
}

/// Best hand out of 8 cards. Looks at all 56 five card subsets.
pub fn eight_card_best(pool: &[Card]) -> Result<PokerHand, PokerMathError> {
    if pool.len() != 8 {
        return Err(PokerMathError::InvalidPoolSize {
            expected: "8",
            found: pool.len(),
        });
    }
    check_distinct(pool)?;
    best_excluding(pool)
}

/// Best Omaha hand. Exactly two of the four hole cards and exactly three of
/// the five board cards must be used, giving 6 * 10 = 60 candidates.
///
/// ```
/// use poker_math::core::{HandCategory, Hand, omaha_best};
///
/// // Four aces on the board but only three of them can play.
/// let hole = Hand::new_from_str("KdKc2c3c").unwrap();
/// let board = Hand::new_from_str("AcAdAhAs9c").unwrap();
/// let best = omaha_best(&hole[..], &board[..]).unwrap();
///
/// assert_eq!(HandCategory::FullHouse, best.category());
/// ```
pub fn omaha_best(hole: &[Card], community: &[Card]) -> Result<PokerHand, PokerMathError> {
    if hole.len() != 4 {
        return Err(PokerMathError::InvalidPoolSize {
            expected: "4 hole",
            found: hole.len(),
        });
    }
    if community.len() != 5 {
        return Err(PokerMathError::InvalidPoolSize {
            expected: "5 community",
            found: community.len(),
        });
    }
    let all: Vec<Card> = hole.iter().chain(community).copied().collect();
    check_distinct(&all)?;

    let mut best = None;
    let mut hole_combos = Combinations::new(4, 2);
    while let Some(h) = hole_combos.next_combination() {
        let mut board_combos = Combinations::new(5, 3);
        while let Some(b) = board_combos.next_combination() {
            let cards = [
                hole[h[0]],
                hole[h[1]],
                community[b[0]],
                community[b[1]],
                community[b[2]],
            ];
            keep_best(&mut best, PokerHand::new(&cards)?);
        }
    }

    best.ok_or(PokerMathError::InvalidHandSize(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIter, Deck, Hand, HandCategory};
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap()[..].to_vec()
    }

    fn brute_force(pool: &[Card]) -> PokerHand {
        CardIter::new(pool, 5)
            .map(|c| PokerHand::new(&c).unwrap())
            .max()
            .unwrap()
    }

    #[test]
    fn test_full_house_from_two_trips_shapes() {
        let best = holdem_best(&cards("AsAhKsKhKd2c3d")).unwrap();
        assert_eq!(HandCategory::FullHouse, best.category());
        // Kings are the three of a kind, aces fill.
        assert_eq!(&[(13, 3), (14, 2)], best.priority_list());
    }

    #[test]
    fn test_holdem_wrong_size() {
        assert_eq!(
            Err(PokerMathError::InvalidPoolSize {
                expected: "7",
                found: 6
            }),
            holdem_best(&cards("AsAhKsKhKd2c")).map(|_| ())
        );
        assert!(holdem_best(&cards("AsAhKsKhKd2c3d4d")).is_err());
    }

    #[test]
    fn test_duplicate_in_pool() {
        let mut pool = cards("AsAhKsKhKd2c");
        pool.push(pool[0]);
        assert_eq!(
            Err(PokerMathError::DuplicateCard(pool[0])),
            holdem_best(&pool).map(|_| ())
        );
    }

    #[test]
    fn test_holdem_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(420);
        for _ in 0..300 {
            let pool = Deck::default().deal_many(7, &mut rng).unwrap();
            let best = holdem_best(&pool).unwrap();
            assert_eq!(brute_force(&pool).strength(), best.strength());
            // The chosen cards come from the pool.
            assert!(best.cards().iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_eight_card_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pool = Deck::default().deal_many(8, &mut rng).unwrap();
            let best = eight_card_best(&pool).unwrap();
            assert_eq!(brute_force(&pool).strength(), best.strength());
        }
        assert!(eight_card_best(&cards("AsAhKsKhKd2c3d")).is_err());
    }

    #[test]
    fn test_eight_card_straight_flush() {
        let best = eight_card_best(&cards("5h6h7h8h9hAsAdAc")).unwrap();
        assert_eq!(HandCategory::StraightFlush, best.category());
        assert_eq!(&[9, 8, 7, 6, 5], best.kickers());
    }

    #[test]
    fn test_best_five_sizes() {
        assert!(best_five(&cards("AsKsQsJs")).is_err());
        assert!(best_five(&cards("AsKsQsJsTs9s8s7s6s5s")).is_err());
        let five = cards("AsKsQsJsTs");
        assert_eq!(PokerHand::new(&five).unwrap(), best_five(&five).unwrap());
        let nine = cards("2c3d4h5s7cAd9h8hKh");
        assert_eq!(brute_force(&nine), best_five(&nine).unwrap());
    }

    #[test]
    fn test_wheel_loses_to_six_high_in_pool() {
        let best = holdem_best(&cards("Ah2c3d4s5h6cKd")).unwrap();
        assert_eq!(HandCategory::Straight, best.category());
        assert!(!best.is_wheel());
        assert_eq!(6, best.kickers()[0]);
    }

    #[test]
    fn test_omaha_needs_two_hole_cards_for_flush() {
        let hole = cards("As3d4c7h");
        let board = cards("2s5s8sTsKh");
        let best = omaha_best(&hole, &board).unwrap();
        assert_eq!(HandCategory::HighCard, best.category());

        // Holdem style rules would have let the single spade make a flush.
        let all: Vec<Card> = hole.iter().chain(&board).copied().collect();
        assert_eq!(HandCategory::Flush, best_five(&all).unwrap().category());
    }

    #[test]
    fn test_omaha_board_quads() {
        let best = omaha_best(&cards("KdKc2c3c"), &cards("AcAdAhAs9c")).unwrap();
        assert_eq!(HandCategory::FullHouse, best.category());
        assert_eq!(&[(14, 3), (13, 2)], best.priority_list());
    }

    #[test]
    fn test_omaha_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let mut deck = Deck::default();
            let hole = deck.deal_many(4, &mut rng).unwrap();
            let board = deck.deal_many(5, &mut rng).unwrap();
            let expected = CardIter::new(&hole, 2)
                .flat_map(|h| {
                    CardIter::new(&board, 3).map(move |b| {
                        let c: Vec<Card> = h.iter().chain(&b).copied().collect();
                        PokerHand::new(&c).unwrap()
                    })
                })
                .max()
                .unwrap();
            assert_eq!(expected, omaha_best(&hole, &board).unwrap());
        }
    }

    #[test]
    fn test_omaha_errors() {
        let board = cards("AcAdAhAs9c");
        assert!(omaha_best(&cards("KdKc2c"), &board).is_err());
        assert!(omaha_best(&cards("KdKc2c3c"), &cards("AcAdAhAs")).is_err());
        assert_eq!(
            Err(PokerMathError::DuplicateCard(Card::try_new(14, 0).unwrap())),
            omaha_best(&cards("KdKc2cAc"), &board).map(|_| ())
        );
    }
}
