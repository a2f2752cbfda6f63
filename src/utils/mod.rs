/// Bitset of player seats, used for showdown winners.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
