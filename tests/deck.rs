//! Deck construction, shuffling, and drawing tests.

use std::collections::{HashMap, HashSet};

use drawpoker::{Card, DECK_SIZE, Deck, DrawError, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn shuffled(seed: u64) -> Vec<Card> {
    let mut deck = Deck::build();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    deck.iter().copied().collect()
}

#[test]
fn build_yields_every_card_once_in_canonical_order() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let cards: Vec<Card> = deck.iter().copied().collect();
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(cards[0], card(Suit::Hearts, 1));
    assert_eq!(cards[12], card(Suit::Hearts, 13));
    assert_eq!(cards[13], card(Suit::Spades, 1));
    assert_eq!(cards[26], card(Suit::Clubs, 1));
    assert_eq!(cards[51], card(Suit::Diamonds, 13));
}

#[test]
fn draw_takes_from_the_top_until_empty() {
    let mut deck = Deck::build();

    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 1)));
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 2)));
    assert_eq!(deck.len(), DECK_SIZE - 2);

    for remaining in (0..DECK_SIZE - 2).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
}

#[test]
fn from_cards_keeps_order() {
    let mut deck = Deck::from_cards(vec![card(Suit::Clubs, 9), card(Suit::Hearts, 4)]);
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, 9)));
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 4)));
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
    assert_eq!(Deck::empty().draw(), Err(DrawError::EmptyDeck));
}

#[test]
fn shuffle_is_a_permutation() {
    let original: HashSet<Card> = Deck::build().iter().copied().collect();
    let cards = shuffled(3);

    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.iter().copied().collect::<HashSet<_>>(), original);
    assert_ne!(cards, Deck::build().iter().copied().collect::<Vec<_>>());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    assert_eq!(shuffled(7), shuffled(7));
    assert_ne!(shuffled(7), shuffled(8));
}

#[test]
fn shuffle_swaps_forward_from_the_top() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut expected: Vec<Card> = Deck::build().iter().copied().collect();
    let n = expected.len();
    for i in 0..n - 1 {
        let r = rng.random_range(i..n);
        expected.swap(i, r);
    }

    assert_eq!(shuffled(11), expected);
}

#[test]
fn shuffle_handles_tiny_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut empty = Deck::empty();
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let mut single = Deck::from_cards(vec![card(Suit::Spades, 5)]);
    single.shuffle(&mut rng);
    assert_eq!(single.draw(), Ok(card(Suit::Spades, 5)));
}

#[test]
fn shuffle_spreads_cards_evenly_over_the_top_spot() {
    const TRIALS: usize = 26_000;
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut tops: HashMap<Card, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);
        *tops.entry(deck.draw().unwrap()).or_default() += 1;
    }

    // Each card is expected on top 500 times; the bounds are about five
    // standard deviations wide.
    assert_eq!(tops.len(), DECK_SIZE);
    for (card, count) in tops {
        assert!((390..=610).contains(&count), "{card} on top {count} times");
    }
}
