#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_math;
use poker_math::core::{Card, CardIter, PokerHand, omaha_best};

fuzz_target!(|cards: [Card; 9]| {
    if cards.iter().enumerate().any(|(i, c)| cards[..i].contains(c)) {
        return;
    }
    let (hole, community) = cards.split_at(4);
    let best = omaha_best(hole, community).unwrap();

    // Exactly two hole cards and three community cards.
    let mut brute: Option<PokerHand> = None;
    for two in CardIter::new(hole, 2) {
        for three in CardIter::new(community, 3) {
            let mut five = two.clone();
            five.extend(three);
            let hand = PokerHand::new(&five).unwrap();
            brute = brute.max(Some(hand));
        }
    }
    assert_eq!(brute, Some(best));
});
