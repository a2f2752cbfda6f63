use std::fmt;
use std::str::FromStr;

use super::PokerMathError;

/// Card rank or value.
/// The discriminant is the face value, so Jack is 11 and Ace is 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a face value in `2..=14` and convert it to a value.
    ///
    /// ```
    /// use poker_math::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_rank(14));
    /// assert_eq!(None, Value::from_rank(1));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        match rank {
            2..=14 => Some(VALUES[usize::from(rank - 2)]),
            _ => None,
        }
    }

    /// The face value of this card, `2..=14`.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Option<Suit> {
        SUITS.get(usize::from(s)).copied()
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and suit second.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from a face value in `2..=14` and a suit in `0..=3`.
    ///
    /// ```
    /// use poker_math::core::{Card, Suit, Value};
    ///
    /// let c = Card::try_new(12, 2).unwrap();
    /// assert_eq!(Card::new(Value::Queen, Suit::Heart), c);
    ///
    /// assert!(Card::try_new(15, 0).is_err());
    /// assert!(Card::try_new(2, 4).is_err());
    /// ```
    pub fn try_new(rank: u8, suit: u8) -> Result<Self, PokerMathError> {
        match (Value::from_rank(rank), Suit::from_u8(suit)) {
            (Some(value), Some(suit)) => Ok(Self { value, suit }),
            _ => Err(PokerMathError::InvalidCard { rank, suit }),
        }
    }

    /// The face value, `2..=14`.
    pub fn rank(&self) -> u8 {
        self.value.rank()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PokerMathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(PokerMathError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(PokerMathError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(PokerMathError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(PokerMathError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(PokerMathError::UnparsedCharsRemaining);
        }
        Ok(Self { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerMathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
