/// Module for `MonteCarloGame` that runs random boards out for fixed hole
/// cards.
mod monte_carlo_game;
/// Export the random simulations.
pub use self::monte_carlo_game::{
    BOARD_SIZE, EquityResults, MAX_PLAYERS, MonteCarloGame, Trace, hand_equity, random_holdem,
    showdown, sim_holdem,
};

/// Every possible board for two fixed hands.
mod exhaustive;
pub use self::exhaustive::{ShowdownTally, play_all_hands, play_all_hands_partition};
#[cfg(feature = "parallel")]
pub use self::exhaustive::play_all_hands_parallel;

/// Builder used to configure an equity simulation.
mod sim_builder;
pub use self::sim_builder::{
    DEFAULT_TRIALS, EquitySimulation, EquitySimulationBuilder, RngEquitySimulationBuilder,
};

/// How often each hand category shows up in seven cards.
mod histogram;
pub use self::histogram::{CategoryHistogram, category_histogram};
