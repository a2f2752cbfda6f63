use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// Poker Math library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerMathError {
    #[error("Card rank {rank} or suit {suit} is out of range")]
    InvalidCard { rank: u8, suit: u8 },
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("A poker hand needs exactly 5 cards, found {0}")]
    InvalidHandSize(usize),
    #[error("Expected a pool of {expected} cards, found {found}")]
    InvalidPoolSize { expected: &'static str, found: usize },
    #[error("Player {player} must have exactly 2 hole cards, found {found}")]
    InvalidHoleCards { player: usize, found: usize },
    #[error("Hole card {0} was given to more than one player")]
    DuplicateHoleCards(Card),
    #[error("Not enough players: {0}")]
    TooFewPlayers(usize),
    #[error("A single deck can't deal to {0} players")]
    TooManyPlayers(usize),
    #[error("No cards left in the deck")]
    EmptyDeck,
    #[error("Hole cards are required to build a simulation")]
    MissingHands,
}

impl PokerMathError {
    /// Did this error come from asking for more cards than the deck holds?
    ///
    /// Every other variant is a validation error raised before any work is
    /// done.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, PokerMathError::EmptyDeck)
    }
}
