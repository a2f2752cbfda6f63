//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type shared by the whole crate.
mod error;
pub use self::error::PokerMathError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand categories.
mod rank;
/// Export the category enum.
pub use self::rank::HandCategory;

/// The ranked five card hand.
mod poker_hand;
pub use self::poker_hand::{HandStrength, PokerHand};

/// Best five card hand out of a bigger pool.
mod best_hand;
pub use self::best_hand::{best_five, eight_card_best, holdem_best, omaha_best};
