//! # Poker Math
//!
//! Poker Math is a library for evaluating poker hands and estimating how
//! often one set of hole cards beats another.
//!
//! It is not the fastest hand ranking. It ranks a five card hand by looking
//! at the counts of each value and suit, then breaks ties by comparing the
//! values in order of how many times they appear. That keeps the ranking code
//! small and easy to check against the rules of the game.
//!
//! ## Core
//!
//! Everything in `core` is agnostic to the poker variant being played. It
//! holds the cards, the deck, the five card `PokerHand` and the code that
//! picks the best five cards out of a larger pool.
//!
//! ```
//! use poker_math::core::{HandCategory, PokerHand};
//!
//! let royal: PokerHand = "AS KS QS JS TS".parse().unwrap();
//! let wheel: PokerHand = "AD 2D 3D 4D 5D".parse().unwrap();
//!
//! assert_eq!(HandCategory::RoyalFlush, royal.category());
//! assert_eq!(HandCategory::StraightFlush, wheel.category());
//! assert!(royal > wheel);
//! ```
//!
//! ## Holdem
//!
//! The `holdem` module runs the board out for a set of hole cards, either at
//! random many times or exhaustively over every possible board.
//!
//! ```
//! use poker_math::core::Hand;
//! use poker_math::holdem::MonteCarloGame;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hands = vec![
//!     Hand::new_from_str("AsAh").unwrap(),
//!     Hand::new_from_str("7c2d").unwrap(),
//! ];
//! let mut game = MonteCarloGame::new(hands).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let results = game.estimate_equity(1_000, &mut rng).unwrap();
//!
//! assert!(results.equity(0) > results.equity(1));
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Texas Holdem equity simulations.
pub mod holdem;
/// Small helpers shared between modules.
pub mod utils;
