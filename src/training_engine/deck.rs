use rand::Rng;
use crate::training_engine::models::{Card, Hand, Rank, Suit};

/// All 52 cards, ordered by suit then rank.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card { rank, suit }))
        .collect()
}

/// One card drawn uniformly from the full deck.
pub fn random_card<R: Rng>(rng: &mut R) -> Card {
    let rank = Rank(rng.gen_range(2u8..=14));
    let suit = Suit::ALL[rng.gen_range(0..Suit::ALL.len())];
    Card { rank, suit }
}

/// Two cards drawn independently; the impossible identical draw is re-rolled.
pub fn random_hand<R: Rng>(rng: &mut R) -> Hand {
    loop {
        let first = random_card(rng);
        let second = random_card(rng);
        if let Ok(hand) = Hand::new(first, second) {
            return hand;
        }
    }
}
