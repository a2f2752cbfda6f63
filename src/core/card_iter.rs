use super::Card;

/// Number of ways to choose `k` items out of `n`.
///
/// ```
/// use poker_math::core::n_choose_k;
///
/// assert_eq!(21, n_choose_k(7, 5));
/// assert_eq!(1_712_304, n_choose_k(48, 5));
/// assert_eq!(0, n_choose_k(3, 5));
/// ```
pub const fn n_choose_k(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let mut result: u64 = 1;
    let mut i = 0;
    while i < k {
        // Exact at every step: the running product is always C(n, i + 1).
        result = result * (n - i) as u64 / (i + 1) as u64;
        i += 1;
    }
    result
}

/// Every `k` sized subset of the indices `0..n` in lexicographic order.
///
/// This doesn't implement `Iterator` since it hands out a borrow of its own
/// state to avoid allocating for every subset.
///
/// ```
/// use poker_math::core::Combinations;
///
/// let mut combos = Combinations::new(4, 2);
/// let mut seen = vec![];
/// while let Some(idx) = combos.next_combination() {
///     seen.push(idx.to_vec());
/// }
/// assert_eq!(
///     vec![
///         vec![0, 1],
///         vec![0, 2],
///         vec![0, 3],
///         vec![1, 2],
///         vec![1, 3],
///         vec![2, 3]
///     ],
///     seen
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    // Set of current offsets being used to create subsets.
    idx: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            idx: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Move to the next subset. `None` once every subset has been seen.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.idx);
        }

        // Find the right most index that can still move forward. Index `i`
        // can go as high as `n - k + i` and still leave room for the rest.
        let mut level = self.k;
        loop {
            if level == 0 {
                self.done = true;
                return None;
            }
            level -= 1;
            if self.idx[level] < self.n - self.k + level {
                break;
            }
        }

        self.idx[level] += 1;
        for j in level + 1..self.k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
        Some(&self.idx)
    }

    /// How many subsets this will produce in total.
    pub fn total(&self) -> u64 {
        n_choose_k(self.n, self.k)
    }
}

/// Iterate over every `num_cards` sized subset of some cards.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],
    combinations: Combinations,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            combinations: Combinations::new(possible_cards.len(), num_cards),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        let cards = self.possible_cards;
        self.combinations
            .next_combination()
            .map(|idx| idx.iter().map(|&i| cards[i]).collect())
    }
}
