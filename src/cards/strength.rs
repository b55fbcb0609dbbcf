use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hands::HandIterator;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The strength is determined by the Hand's Ranking, and the
/// kicker cards are used to break ties. Larger is better; equal means a chop.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    /// The strongest five-card hand that can be formed from `hand`.
    ///
    /// With more than five cards every five-card subset is scored and the
    /// maximum kept, so the result never depends on card order. Hands of five
    /// or fewer cards are scored as they are.
    pub fn best(hand: Hand) -> Self {
        match hand.size() {
            n if n > 5 => HandIterator::from((5, hand))
                .map(Self::from)
                .max()
                .expect("at least one five card subset"),
            _ => Self::from(hand),
        }
    }
    pub fn category(&self) -> Category {
        self.value.category()
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::card::Card;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn strength(cards: &str) -> Strength {
        Strength::best(Hand::try_from(cards).unwrap())
    }

    #[test]
    fn category_ladder() {
        let ladder = [
            "Ks 9d 7c 4h 2s",
            "2s 2d 9c 7h 4s",
            "3s 3d 2c 2h 9s",
            "2s 2d 2c 9h 7s",
            "As 2d 3c 4h 5s",
            "2h 4h 6h 8h Th",
            "2s 2d 2c 3h 3s",
            "2s 2d 2c 2h 3s",
            "9s Ts Js Qs Ks",
            "Ts Js Qs Ks As",
        ]
        .map(strength);
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
        let categories = ladder.map(|s| s.category());
        assert_eq!(categories, Category::all());
    }

    #[test]
    fn wheel_loses_to_six_high() {
        assert!(strength("As 2d 3c 4h 5s") < strength("2d 3c 4h 5s 6d"));
    }

    #[test]
    fn royal_beats_quads() {
        assert!(strength("As Ks Qs Js Ts") > strength("Js Jh Jd Jc 3s"));
    }

    #[test]
    fn flush_kickers_break_ties() {
        assert!(strength("Ah Kh 9h 5h 2h") > strength("Ad Kd 8d 7d 6d"));
        assert!(strength("Ah Kh 9h 5h 3h") > strength("Ad Kd 9d 5d 2d"));
        assert_eq!(strength("Ah Kh 9h 5h 2h"), strength("As Ks 9s 5s 2s"));
    }

    #[test]
    fn pair_kickers_break_ties() {
        assert!(strength("Ah Ad Kc 9s 2h") > strength("As Ac Qd Js Th"));
        assert_eq!(strength("Ah Ad Kc 9s 2h"), strength("As Ac Kd 9h 2s"));
    }

    #[test]
    fn board_plays_for_both() {
        let board = "Ts Js Qs Ks As";
        let a = strength(&format!("{} 2c 3d", board));
        let b = strength(&format!("{} 4c 5d", board));
        assert_eq!(a, b);
        assert_eq!(a.category(), Category::RoyalFlush);
    }

    #[test]
    fn order_independent() {
        let a = Hand::from(Card::parse("Kc Kd 7h 7s 2c 9d As").unwrap());
        let b = Hand::from(Card::parse("As 9d 2c 7s 7h Kd Kc").unwrap());
        assert_eq!(Strength::best(a), Strength::best(b));
    }

    #[test]
    fn best_subset_matches_direct_evaluation() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..2000 {
            let hand = Deck::new().sample(7, rng);
            assert_eq!(Strength::best(hand), Strength::from(hand), "{}", hand);
        }
    }

    #[test]
    fn partial_hands_evaluate() {
        let hand = crate::cards::hole::Hole::random();
        let s = Strength::best(Hand::from(hand));
        assert!(s.category() <= Category::Pair);
    }
}
