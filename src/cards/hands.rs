use super::card::Card;
use super::hand::Hand;

/// HandIterator visits every k-card subset of a fixed universe of cards.
///
/// It walks k-bit patterns over the universe's positions in colexicographic
/// order with Gosper's hack, then maps each pattern back onto the universe's
/// cards. The walk is deterministic and holds no allocation besides the
/// universe's card list.
/// - k-subsets of a 7-card Hand drive best-of-five evaluation
/// - 2-subsets of one rank's four cards enumerate pocket pairs
pub struct HandIterator {
    next: u64,
    last: u64,
    cards: Vec<Card>,
}

impl HandIterator {
    /// n choose k
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next > self.last
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn current(&self) -> Hand {
        let mut bits = self.next;
        let mut hand = Hand::empty();
        while bits > 0 {
            hand.insert(self.cards[bits.trailing_zeros() as usize]);
            bits &= bits - 1;
        }
        hand
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.next = match self.next {
                0 => 1, // the lone empty subset
                _ => self.permute(),
            };
            Some(hand)
        }
    }
}

/// k-subsets of the given universe
impl From<(usize, Hand)> for HandIterator {
    fn from((k, universe): (usize, Hand)) -> Self {
        let cards = Vec::<Card>::from(universe);
        let n = cards.len();
        match k {
            k if k > n => Self {
                next: 1,
                last: 0,
                cards,
            },
            k => Self {
                next: (1 << k) - 1,
                last: ((1 << k) - 1) << (n - k),
                cards,
            },
        }
    }
}
