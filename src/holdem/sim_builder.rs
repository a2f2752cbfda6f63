use rand::{Rng, SeedableRng, rngs::StdRng};

use super::monte_carlo_game::{EquityResults, MonteCarloGame, Trace};
use crate::core::{Hand, PokerMathError};

/// Trials used when the builder isn't told otherwise.
pub const DEFAULT_TRIALS: usize = 10_000;

/// # EquitySimulationBuilder
///
/// `RngEquitySimulationBuilder` configures a monte carlo equity run. The hole
/// cards are required, other fields are optional.
///
/// `EquitySimulationBuilder` is a type alias for
/// `RngEquitySimulationBuilder<StdRng>`. When no rng is given one is seeded
/// from the thread rng.
///
/// ## Examples
///
/// ```
/// use poker_math::core::Hand;
/// use poker_math::holdem::EquitySimulationBuilder;
///
/// let hands = vec![
///     Hand::new_from_str("AdAh").unwrap(),
///     Hand::new_from_str("2c2s").unwrap(),
/// ];
/// let mut sim = EquitySimulationBuilder::default()
///     .hands(hands)
///     .trials(100)
///     .build()
///     .unwrap();
/// let results = sim.run().unwrap();
/// assert_eq!(100, results.trials);
/// ```
///
/// For a repeatable run pass in a seeded rng:
///
/// ```
/// use poker_math::core::Hand;
/// use poker_math::holdem::RngEquitySimulationBuilder;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let hands = vec![
///     Hand::new_from_str("AdAh").unwrap(),
///     Hand::new_from_str("2c2s").unwrap(),
/// ];
/// let sim = RngEquitySimulationBuilder::default()
///     .hands(hands)
///     .rng(SmallRng::seed_from_u64(420))
///     .build()
///     .unwrap();
/// ```
pub struct RngEquitySimulationBuilder<R: Rng + SeedableRng> {
    hands: Option<Vec<Hand>>,
    trials: usize,
    collect_traces: bool,
    rng: Option<R>,
}

impl<R: Rng + SeedableRng> RngEquitySimulationBuilder<R> {
    /// Set the hole cards, one hand per player.
    pub fn hands(mut self, hands: Vec<Hand>) -> Self {
        self.hands = Some(hands);
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Keep every board that gets dealt.
    pub fn collect_traces(mut self, collect_traces: bool) -> Self {
        self.collect_traces = collect_traces;
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the hands and create the simulation.
    ///
    /// Returns `MissingHands` if no hands were given, or whatever is wrong
    /// with the hole cards.
    pub fn build(self) -> Result<EquitySimulation<R>, PokerMathError> {
        let hands = self.hands.ok_or(PokerMathError::MissingHands)?;
        let game = MonteCarloGame::new(hands)?.collect_traces(self.collect_traces);
        let rng = self
            .rng
            .unwrap_or_else(|| R::from_rng(&mut rand::rng()));

        Ok(EquitySimulation {
            game,
            rng,
            trials: self.trials,
        })
    }
}

impl<R: Rng + SeedableRng> Default for RngEquitySimulationBuilder<R> {
    fn default() -> Self {
        Self {
            hands: None,
            trials: DEFAULT_TRIALS,
            collect_traces: false,
            rng: None,
        }
    }
}

/// The rng is StdRng.
pub type EquitySimulationBuilder = RngEquitySimulationBuilder<StdRng>;

/// A configured equity run. Create with `RngEquitySimulationBuilder`.
#[derive(Debug)]
pub struct EquitySimulation<R: Rng> {
    game: MonteCarloGame,
    rng: R,
    trials: usize,
}

impl<R: Rng> EquitySimulation<R> {
    /// Run the configured number of trials.
    ///
    /// Calling this again keeps drawing from the same rng, so the results
    /// differ from the first run.
    pub fn run(&mut self) -> Result<EquityResults, PokerMathError> {
        self.game.estimate_equity(self.trials, &mut self.rng)
    }

    pub fn game(&self) -> &MonteCarloGame {
        &self.game
    }

    /// Boards from every run so far, if traces were turned on.
    pub fn traces(&self) -> &[Trace] {
        self.game.traces()
    }
}
