use std::fmt;
use std::ops::{Index, RangeFull};
use std::slice::Iter;

use super::{Card, PokerMathError, Suit, Value};

/// An unranked collection of distinct cards.
///
/// This is what a player holds before the board is known, or the board
/// itself. Use `PokerHand` for a ranked five card hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// ```
    /// use poker_math::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }

    /// Create a hand from cards.
    /// No verification is done at all.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand from a string of value/suit pairs such as `"AdKh"`.
    /// Whitespace between cards is skipped.
    ///
    /// ```
    /// use poker_math::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AdKh").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert!(hand.contains(&Card::new(Value::King, Suit::Heart)));
    ///
    /// assert!(Hand::new_from_str("AdAd").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerMathError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut cards: Vec<Card> = Vec::with_capacity(5);

        // Keep looping until we explicitly break
        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(PokerMathError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(PokerMathError::TooFewChars)
                .map(Suit::from_char)?
                .ok_or(PokerMathError::UnexpectedSuitChar)?;

            let c = Card { value: v, suit: s };
            if cards.contains(&c) {
                return Err(PokerMathError::DuplicateCard(c));
            }
            cards.push(c);
        }

        Ok(Self { cards })
    }

    /// Add card at to the hand.
    /// No verification is done at all.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card() {
        let mut h = Hand::new();
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        h.push(c);
        // Make sure that the card was added to the vec.
        assert_eq!(1, h.len());
        assert_eq!(c, h[0]);
    }

    #[test]
    fn test_parse_hand() {
        let h = Hand::new_from_str("AdKh 2c").unwrap();
        assert_eq!(
            vec![
                Card::new(Value::Ace, Suit::Diamond),
                Card::new(Value::King, Suit::Heart),
                Card::new(Value::Two, Suit::Club),
            ],
            h[..].to_vec()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(PokerMathError::UnexpectedValueChar),
            Hand::new_from_str("1d")
        );
        assert_eq!(
            Err(PokerMathError::UnexpectedSuitChar),
            Hand::new_from_str("Az")
        );
        assert_eq!(Err(PokerMathError::TooFewChars), Hand::new_from_str("AdK"));
        assert_eq!(
            Err(PokerMathError::DuplicateCard(Card::new(
                Value::Ace,
                Suit::Diamond
            ))),
            Hand::new_from_str("AdAd")
        );
    }

    #[test]
    fn test_display() {
        let h = Hand::new_from_str("AdTh").unwrap();
        assert_eq!("AD TH", h.to_string());
    }
}
