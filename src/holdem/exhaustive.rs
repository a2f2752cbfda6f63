use std::cmp::Ordering;
use std::ops::{Add, Range};

use tracing::{Level, event, trace_span};

use super::monte_carlo_game::{BOARD_SIZE, deck_without_hole_cards};
use crate::core::{Card, Combinations, Hand, PokerMathError, holdem_best};

/// How often the boards logged progress.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Exact head to head counts over every possible board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowdownTally {
    pub player_one_wins: u64,
    pub player_two_wins: u64,
    pub splits: u64,
}

impl ShowdownTally {
    /// Number of boards played.
    pub fn total(&self) -> u64 {
        self.player_one_wins + self.player_two_wins + self.splits
    }

    /// Player one's share of the pots, splits counting half.
    pub fn player_one_equity(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.player_one_wins as f64 + self.splits as f64 / 2.0) / self.total() as f64
    }

    fn record(&mut self, result: Ordering) {
        match result {
            Ordering::Greater => self.player_one_wins += 1,
            Ordering::Less => self.player_two_wins += 1,
            Ordering::Equal => self.splits += 1,
        }
    }
}

impl Add for ShowdownTally {
    type Output = ShowdownTally;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            player_one_wins: self.player_one_wins + rhs.player_one_wins,
            player_two_wins: self.player_two_wins + rhs.player_two_wins,
            splits: self.splits + rhs.splits,
        }
    }
}

/// Validate both hands and return the other 48 cards, sorted.
fn remaining_cards(hole1: &Hand, hole2: &Hand) -> Result<Vec<Card>, PokerMathError> {
    let deck = deck_without_hole_cards(&[hole1.clone(), hole2.clone()])?;
    let mut cards: Vec<Card> = deck.into_iter().collect();
    cards.sort();
    Ok(cards)
}

/// Play every board whose lowest card sits at an index in `outer`.
///
/// Each board is counted once: it belongs to exactly one outer index, the
/// position of its lowest card in `remaining`.
fn play_boards(
    hole1: &Hand,
    hole2: &Hand,
    remaining: &[Card],
    outer: Range<usize>,
) -> Result<ShowdownTally, PokerMathError> {
    let mut tally = ShowdownTally::default();
    let mut pool_one: Vec<Card> = Vec::with_capacity(7);
    let mut pool_two: Vec<Card> = Vec::with_capacity(7);
    let mut board = [remaining[0]; BOARD_SIZE];
    let end = outer.end.min(remaining.len());

    for first in outer.start..end {
        board[0] = remaining[first];
        let rest = &remaining[first + 1..];
        let mut others = Combinations::new(rest.len(), BOARD_SIZE - 1);
        while let Some(idx) = others.next_combination() {
            for (slot, &i) in board[1..].iter_mut().zip(idx) {
                *slot = rest[i];
            }

            pool_one.clear();
            pool_one.extend_from_slice(&hole1[..]);
            pool_one.extend_from_slice(&board);
            pool_two.clear();
            pool_two.extend_from_slice(&hole2[..]);
            pool_two.extend_from_slice(&board);

            tally.record(holdem_best(&pool_one)?.cmp(&holdem_best(&pool_two)?));

            if tally.total() % PROGRESS_INTERVAL == 0 {
                event!(Level::DEBUG, boards = tally.total(), first, "play_all_hands_progress");
            }
        }
    }
    Ok(tally)
}

/// Play two hands against each other on every one of the C(48, 5) =
/// 1,712,304 possible boards.
///
/// This is deterministic and slow. It's the exact answer the monte carlo
/// estimates should converge to.
pub fn play_all_hands(hole1: &Hand, hole2: &Hand) -> Result<ShowdownTally, PokerMathError> {
    let span = trace_span!("play_all_hands");
    let _enter = span.enter();

    let remaining = remaining_cards(hole1, hole2)?;
    let tally = play_boards(hole1, hole2, &remaining, 0..remaining.len())?;
    event!(Level::DEBUG, hole1 = %hole1, hole2 = %hole2, ?tally, "play_all_hands_done");
    Ok(tally)
}

/// Play only the boards whose lowest card is at one of the `outer` indices
/// into the sorted remaining cards.
///
/// Adding up the tallies for a set of ranges that cover `0..48` without
/// overlapping gives the same answer as `play_all_hands`. Ranges past the
/// end of the remaining cards are clamped.
pub fn play_all_hands_partition(
    hole1: &Hand,
    hole2: &Hand,
    outer: Range<usize>,
) -> Result<ShowdownTally, PokerMathError> {
    let remaining = remaining_cards(hole1, hole2)?;
    play_boards(hole1, hole2, &remaining, outer)
}

/// `play_all_hands` with one rayon task per outer index.
#[cfg(feature = "parallel")]
pub fn play_all_hands_parallel(
    hole1: &Hand,
    hole2: &Hand,
) -> Result<ShowdownTally, PokerMathError> {
    use rayon::prelude::*;

    let remaining = remaining_cards(hole1, hole2)?;
    (0..remaining.len())
        .into_par_iter()
        .map(|first| play_boards(hole1, hole2, &remaining, first..first + 1))
        .try_reduce(ShowdownTally::default, |a, b| Ok(a + b))
}
