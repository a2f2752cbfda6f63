use std::fmt;

/// All the different categories a five card hand can fall into.
///
/// The discriminant is the ordinal used to order categories, so any hand in
/// a higher category beats every hand in a lower one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two diffent pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to Ace all of the same suit.
    RoyalFlush = 9,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

impl HandCategory {
    /// Every category from weakest to strongest.
    pub fn all() -> [HandCategory; 10] {
        CATEGORIES
    }

    /// The ordinal, `0..=9`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<HandCategory> {
        CATEGORIES.get(usize::from(ordinal)).copied()
    }

    /// Is this one of the categories where an ace can play low?
    pub fn is_straight(self) -> bool {
        matches!(self, HandCategory::Straight | HandCategory::StraightFlush)
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
