#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_math;
use poker_math::core::{CardIter, Hand, PokerHand, holdem_best};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            if h.len() == 7 {
                let r_seven = holdem_best(&h[..]).unwrap();
                let r_five_max = CardIter::new(&h[..], 5)
                    .map(|cv| PokerHand::new(&cv).unwrap())
                    .max()
                    .unwrap();
                assert_eq!(r_five_max, r_seven);

                // Order of the cards never changes the answer.
                let mut reversed: Vec<_> = h.iter().copied().collect();
                reversed.reverse();
                assert_eq!(r_seven, holdem_best(&reversed).unwrap());
            }
        }
    }
});
