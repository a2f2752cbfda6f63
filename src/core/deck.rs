use crate::core::card::{Card, Suit, Value};
use crate::core::PokerMathError;
use rand::Rng;
use std::slice::Iter;
use std::vec::IntoIter;

/// Deck of the cards that have not been dealt yet.
///
/// A fresh deck holds all 52 cards. Known cards are taken out with
/// `remove` before the rest are dealt at random with `draw_random`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a new empty deck
    ///
    /// ```
    /// use poker_math::core::Deck;
    ///
    /// assert!(Deck::new().is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    ///
    /// Returns false if the card had already been removed.
    ///
    /// ```
    /// use poker_math::core::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::default();
    /// let card = Card::new(Value::Ace, Suit::Spade);
    ///
    /// assert!(deck.remove(&card));
    /// assert!(!deck.remove(&card));
    /// assert_eq!(51, deck.len());
    /// ```
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Remove and return a card picked uniformly at random from the cards
    /// still in the deck.
    ///
    /// ```
    /// use poker_math::core::Deck;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(420);
    /// let mut deck = Deck::default();
    /// let card = deck.draw_random(&mut rng).unwrap();
    ///
    /// assert!(!deck.contains(&card));
    /// assert_eq!(51, deck.len());
    /// ```
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PokerMathError> {
        if self.cards.is_empty() {
            return Err(PokerMathError::EmptyDeck);
        }
        let idx = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }

    /// Draw `n` cards at random.
    pub fn deal_many<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Card>, PokerMathError> {
        if n > self.cards.len() {
            return Err(PokerMathError::EmptyDeck);
        }
        (0..n).map(|_| self.draw_random(rng)).collect()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use poker_math::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card {
                    value: *v,
                    suit: *s,
                });
            }
        }
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}
