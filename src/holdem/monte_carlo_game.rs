use std::cmp::Ordering;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Card, Deck, Hand, PokerHand, PokerMathError, holdem_best};
use crate::utils::PlayerBitSet;

/// Number of community cards in holdem.
pub const BOARD_SIZE: usize = 5;
/// Most players one deck can give two hole cards to while leaving a board.
pub const MAX_PLAYERS: usize = (52 - BOARD_SIZE) / 2;

#[cfg(feature = "parallel")]
const BATCH_SIZE: usize = 1_000;

/// Check the hole cards and return a deck without them.
///
/// Every player needs exactly two cards and no card may be held by two
/// players.
pub(crate) fn deck_without_hole_cards(hands: &[Hand]) -> Result<Deck, PokerMathError> {
    if hands.is_empty() {
        return Err(PokerMathError::TooFewPlayers(0));
    }
    if hands.len() > MAX_PLAYERS {
        return Err(PokerMathError::TooManyPlayers(hands.len()));
    }
    if let Some((player, hand)) = hands.iter().enumerate().find(|(_, h)| h.len() != 2) {
        return Err(PokerMathError::InvalidHoleCards {
            player,
            found: hand.len(),
        });
    }

    let mut deck = Deck::default();
    for card in hands.iter().flat_map(|h| h.iter()) {
        if !deck.remove(card) {
            return Err(PokerMathError::DuplicateHoleCards(*card));
        }
    }
    Ok(deck)
}

/// Find every hand that ties for the best seven card hand on this board.
///
/// Returns the winners along with the winning hand.
pub fn showdown(hands: &[Hand], board: &[Card]) -> Result<(PlayerBitSet, PokerHand), PokerMathError> {
    let mut pool: Vec<Card> = Vec::with_capacity(7);
    let mut winners = PlayerBitSet::default();
    let mut best: Option<PokerHand> = None;

    for (idx, hand) in hands.iter().enumerate() {
        pool.clear();
        pool.extend_from_slice(&hand[..]);
        pool.extend_from_slice(board);
        let rank = holdem_best(&pool)?;

        match best.map(|b| rank.cmp(&b)) {
            // If this is the higest then reset all the bitset
            // Then set only the current hand's index as true
            None | Some(Ordering::Greater) => {
                winners = PlayerBitSet::default();
                winners.enable(idx);
                best = Some(rank);
            }
            // If this is a tie then add the index.
            Some(Ordering::Equal) => winners.enable(idx),
            // Otherwise keep what we've already found.
            Some(Ordering::Less) => {}
        }
    }

    best.map(|b| (winners, b))
        .ok_or(PokerMathError::TooFewPlayers(hands.len()))
}

/// Deal a board out of `deck` and play it.
fn run_board<R: Rng + ?Sized>(
    hands: &[Hand],
    mut deck: Deck,
    rng: &mut R,
) -> Result<(PlayerBitSet, PokerHand, Vec<Card>), PokerMathError> {
    let board = deck.deal_many(BOARD_SIZE, rng)?;
    let (winners, rank) = showdown(hands, &board)?;
    event!(Level::TRACE, ?board, %winners, category = %rank.category(), "board_played");
    Ok((winners, rank, board))
}

/// One board and who won it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub board: Vec<Card>,
    pub winners: PlayerBitSet,
}

/// Accumulated pot shares.
///
/// Each trial hands out exactly one pot. Every winner of a trial gets
/// `1 / number of winners` of it, so the shares always sum to the number of
/// trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResults {
    pub trials: usize,
    pub shares: Vec<f64>,
}

impl EquityResults {
    pub fn new(players: usize) -> Self {
        Self {
            trials: 0,
            shares: vec![0.0; players],
        }
    }

    /// Split one pot between the winners.
    pub fn award(&mut self, winners: PlayerBitSet) {
        // each player gets the pot divided by the number of people with exactly the
        // same hand value. This is to make sure that ties are correctly valued.
        let value = 1.0 / winners.count() as f64;
        for idx in winners.ones() {
            self.shares[idx] += value;
        }
        self.trials += 1;
    }

    /// Combine results from independent runs over the same players.
    pub fn merge(mut self, other: EquityResults) -> Self {
        for (a, b) in self.shares.iter_mut().zip(other.shares) {
            *a += b;
        }
        self.trials += other.trials;
        self
    }

    /// Raw number of pots won by this player.
    ///
    /// # Panics
    ///
    /// If `idx` is not a seat in these results.
    pub fn share(&self, idx: usize) -> f64 {
        self.shares[idx]
    }

    /// Fraction of the pots won by this player.
    ///
    /// # Panics
    ///
    /// If `idx` is not a seat in these results, even when no trials have
    /// been run.
    pub fn equity(&self, idx: usize) -> f64 {
        let share = self.shares[idx];
        if self.trials == 0 {
            0.0
        } else {
            share / self.trials as f64
        }
    }

    pub fn equities(&self) -> Vec<f64> {
        (0..self.shares.len()).map(|i| self.equity(i)).collect()
    }

    /// Sum of all shares. Equal to `trials` up to float rounding.
    pub fn total(&self) -> f64 {
        self.shares.iter().sum()
    }
}

/// A holdem game where every player's hole cards are known and the board is
/// dealt at random.
#[derive(Debug, Clone)]
pub struct MonteCarloGame {
    /// Hole cards for each player.
    hands: Vec<Hand>,
    /// Every card not in someone's hand. Cloned for each trial.
    deck: Deck,
    collect_traces: bool,
    traces: Vec<Trace>,
}

impl MonteCarloGame {
    /// Validate the hole cards. Nothing is dealt until `simulate` is called.
    ///
    /// A player without exactly two hole cards is `InvalidHoleCards`. A card
    /// held by more than one player is `DuplicateHoleCards`.
    pub fn new(hands: Vec<Hand>) -> Result<Self, PokerMathError> {
        let deck = deck_without_hole_cards(&hands)?;
        Ok(Self {
            hands,
            deck,
            collect_traces: false,
            traces: vec![],
        })
    }

    /// Keep the board and winners of every trial.
    pub fn collect_traces(mut self, collect: bool) -> Self {
        self.collect_traces = collect;
        self
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Simulate finishing a holdem game.
    ///
    /// This will deal a fresh board and then return the tuple
    /// of which hands had the best rank in the end.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(PlayerBitSet, PokerHand), PokerMathError> {
        let (winners, rank, board) = run_board(&self.hands, self.deck.clone(), rng)?;
        if self.collect_traces {
            self.traces.push(Trace { board, winners });
        }
        Ok((winners, rank))
    }

    /// Run `trials` boards and add up the pot shares.
    pub fn estimate_equity<R: Rng + ?Sized>(
        &mut self,
        trials: usize,
        rng: &mut R,
    ) -> Result<EquityResults, PokerMathError> {
        let span = trace_span!("MonteCarloGame::estimate_equity", trials);
        let _enter = span.enter();
        event!(
            Level::DEBUG,
            players = self.hands.len(),
            trials,
            "estimate_equity_start"
        );

        let mut results = EquityResults::new(self.hands.len());
        for _ in 0..trials {
            let (winners, _) = self.simulate(rng)?;
            results.award(winners);
        }

        event!(Level::DEBUG, shares = ?results.shares, "estimate_equity_done");
        Ok(results)
    }

    /// Same as `estimate_equity` but spread over the rayon thread pool.
    ///
    /// Trials run in batches, each with its own `SmallRng` seeded from
    /// `seed` and the batch number. Traces are not collected.
    #[cfg(feature = "parallel")]
    pub fn estimate_equity_parallel(
        &self,
        trials: usize,
        seed: u64,
    ) -> Result<EquityResults, PokerMathError> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rayon::prelude::*;

        let players = self.hands.len();
        let batches = trials.div_ceil(BATCH_SIZE);
        event!(Level::DEBUG, players, trials, batches, "estimate_equity_parallel");

        let per_batch: Vec<EquityResults> = (0..batches)
            .into_par_iter()
            .map(|batch| {
                let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
                let this_batch = BATCH_SIZE.min(trials - batch * BATCH_SIZE);
                let mut results = EquityResults::new(players);
                for _ in 0..this_batch {
                    let (winners, _, _) = run_board(&self.hands, self.deck.clone(), &mut rng)?;
                    results.award(winners);
                }
                Ok(results)
            })
            .collect::<Result<_, PokerMathError>>()?;

        // Merge in batch order so float sums don't depend on scheduling.
        Ok(per_batch
            .into_iter()
            .fold(EquityResults::new(players), EquityResults::merge))
    }
}

/// Deal one random board to fixed hole cards and return the winners.
///
/// Fails before dealing with `InvalidHoleCards` when a player doesn't hold
/// exactly two cards, and with `DuplicateHoleCards` when two players share
/// a card.
///
/// ```
/// use poker_math::core::Hand;
/// use poker_math::holdem::random_holdem;
///
/// let hands = vec![
///     Hand::new_from_str("AsAh").unwrap(),
///     Hand::new_from_str("KsKh").unwrap(),
/// ];
/// let winners = random_holdem(&hands, &mut rand::rng()).unwrap();
/// assert!(winners.count() >= 1);
/// ```
pub fn random_holdem<R: Rng + ?Sized>(
    hands: &[Hand],
    rng: &mut R,
) -> Result<PlayerBitSet, PokerMathError> {
    let deck = deck_without_hole_cards(hands)?;
    let (winners, _, _) = run_board(hands, deck, rng)?;
    Ok(winners)
}

/// Run `trials` random boards for fixed hole cards.
pub fn sim_holdem<R: Rng + ?Sized>(
    hands: &[Hand],
    trials: usize,
    rng: &mut R,
) -> Result<EquityResults, PokerMathError> {
    MonteCarloGame::new(hands.to_vec())?.estimate_equity(trials, rng)
}

/// Equity of one starting hand against `num_players - 1` opponents holding
/// random cards. Opponents get new cards every trial.
///
/// Returns the fraction of pots won by `hole`.
pub fn hand_equity<R: Rng + ?Sized>(
    hole: &Hand,
    num_players: usize,
    trials: usize,
    rng: &mut R,
) -> Result<f64, PokerMathError> {
    if num_players < 2 {
        return Err(PokerMathError::TooFewPlayers(num_players));
    }
    if num_players > MAX_PLAYERS {
        return Err(PokerMathError::TooManyPlayers(num_players));
    }
    let base = deck_without_hole_cards(std::slice::from_ref(hole))?;

    let span = trace_span!("hand_equity", num_players, trials);
    let _enter = span.enter();

    let mut equity = 0.0;
    let mut hands: Vec<Hand> = Vec::with_capacity(num_players);
    for _ in 0..trials {
        let mut deck = base.clone();
        hands.clear();
        hands.push(hole.clone());
        for _ in 1..num_players {
            hands.push(Hand::new_with_cards(deck.deal_many(2, rng)?));
        }
        let (winners, _, _) = run_board(&hands, deck, rng)?;
        if winners.get(0) {
            equity += 1.0 / winners.count() as f64;
        }
    }

    if trials == 0 {
        return Ok(0.0);
    }
    let equity = equity / trials as f64;
    event!(Level::DEBUG, hole = %hole, num_players, trials, equity, "hand_equity_done");
    Ok(equity)
}
