use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use rand::Rng;

/// The cards not yet spoken for.
///
/// Wraps a [`Hand`] of remaining cards. Random selection goes through an
/// explicit `Rng` so that seeded callers get reproducible deals; there is no
/// global deck state anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The full deck minus every card in `used`.
    pub fn remaining(used: Hand) -> Self {
        Self(used.complement())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card.
    ///
    /// Panics on an empty deck: validated requests can never get here.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "deck exhausted");
        let i = rng.random_range(0..self.0.size());
        let card = self.0.nth(i).expect("index within deck size");
        self.0.remove(card);
        card
    }
    /// `k` distinct cards, uniform over all k-subsets of the remaining deck.
    /// The deck itself is left untouched.
    ///
    /// Panics when fewer than `k` cards remain.
    pub fn sample<R: Rng>(&self, k: usize, rng: &mut R) -> Hand {
        assert!(k <= self.0.size(), "deck exhausted: {} of {}", k, self.0.size());
        let mut deck = *self;
        (0..k)
            .map(|_| deck.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals the cards for the next street.
    pub fn deal<R: Rng>(&mut self, street: Street, rng: &mut R) -> Hand {
        (0..street.n_revealed())
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}
