//! Hand classification and pay table tests.

use drawpoker::{
    Card, ClassifyError, Deck, HAND_SIZE, Hand, HandCategory, HoldError, PAY_TABLE, RedrawError,
    Suit, classify, title_for,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn royal_flush_pays_800_with_every_card() {
    let hand = [
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 10),
        card(Suit::Hearts, 11),
        card(Suit::Hearts, 12),
        card(Suit::Hearts, 13),
    ];
    let result = classify(&hand).unwrap();

    assert_eq!(result.category(), HandCategory::RoyalFlush);
    assert_eq!(result.multiplier(), 800);
    assert_eq!(result.title(), "Royal Flush");
    assert_eq!(result.cards(), &hand);
}

#[test]
fn royal_flush_in_any_order() {
    let hand = [
        card(Suit::Clubs, 12),
        card(Suit::Clubs, 1),
        card(Suit::Clubs, 13),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 11),
    ];
    assert_eq!(
        classify(&hand).unwrap().category(),
        HandCategory::RoyalFlush
    );
}

#[test]
fn ace_low_straight_flush_is_not_royal() {
    let hand = [
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
    ];
    let result = classify(&hand).unwrap();

    assert_eq!(result.category(), HandCategory::StraightFlush);
    assert_eq!(result.multiplier(), 50);
    assert_eq!(result.cards(), &hand);
}

#[test]
fn straight_flush_cards_come_back_sorted() {
    let hand = [
        card(Suit::Spades, 13),
        card(Suit::Spades, 9),
        card(Suit::Spades, 11),
        card(Suit::Spades, 10),
        card(Suit::Spades, 12),
    ];
    let result = classify(&hand).unwrap();

    assert_eq!(result.category(), HandCategory::StraightFlush);
    let ranks: Vec<u8> = result.cards().iter().map(Card::rank).collect();
    assert_eq!(ranks, vec![9, 10, 11, 12, 13]);
}

#[test]
fn four_of_a_kind_leaves_out_the_kicker() {
    let hand = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Hearts, 4),
    ];
    let result = classify(&hand).unwrap();

    assert_eq!(result.category(), HandCategory::FourOfAKind);
    assert_eq!(result.multiplier(), 25);
    assert_eq!(result.cards(), &hand[..4]);
    assert!(!result.contains(&card(Suit::Hearts, 4)));
}

#[test]
fn full_house_lists_the_triple_first() {
    let hand = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Clubs, 4),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 4),
    ];
    let result = classify(&hand).unwrap();

    assert_eq!(result.category(), HandCategory::FullHouse);
    assert_eq!(result.multiplier(), 9);
    assert_eq!(
        result.cards(),
        &[
            card(Suit::Clubs, 4),
            card(Suit::Diamonds, 4),
            card(Suit::Hearts, 4),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 1),
        ]
    );
}

#[test]
fn flush_and_straight() {
    let flush = [
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 7),
        card(Suit::Hearts, 9),
    ];
    let result = classify(&flush).unwrap();
    assert_eq!(result.category(), HandCategory::Flush);
    assert_eq!(result.multiplier(), 6);
    assert_eq!(result.cards().len(), HAND_SIZE);

    let straight = [
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 5),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 7),
    ];
    let result = classify(&straight).unwrap();
    assert_eq!(result.category(), HandCategory::Straight);
    assert_eq!(result.multiplier(), 4);
    assert_eq!(result.cards(), &straight);
}

#[test]
fn ace_never_plays_high_in_a_straight() {
    let broadway = [
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 11),
        card(Suit::Hearts, 12),
        card(Suit::Spades, 13),
        card(Suit::Clubs, 1),
    ];
    let result = classify(&broadway).unwrap();
    assert_eq!(result.category(), HandCategory::Nothing);

    let wraparound = [
        card(Suit::Hearts, 12),
        card(Suit::Hearts, 13),
        card(Suit::Hearts, 1),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
    ];
    assert_eq!(
        classify(&wraparound).unwrap().category(),
        HandCategory::Flush
    );
}

#[test]
fn three_of_a_kind_and_two_pair() {
    let trips = [
        card(Suit::Hearts, 1),
        card(Suit::Spades, 1),
        card(Suit::Clubs, 1),
        card(Suit::Spades, 4),
        card(Suit::Clubs, 5),
    ];
    let result = classify(&trips).unwrap();
    assert_eq!(result.category(), HandCategory::ThreeOfAKind);
    assert_eq!(result.multiplier(), 3);
    assert_eq!(result.cards(), &trips[..3]);

    let two_pair = [
        card(Suit::Hearts, 11),
        card(Suit::Diamonds, 11),
        card(Suit::Hearts, 2),
        card(Suit::Spades, 2),
        card(Suit::Clubs, 5),
    ];
    let result = classify(&two_pair).unwrap();
    assert_eq!(result.category(), HandCategory::TwoPair);
    assert_eq!(result.multiplier(), 2);
    assert_eq!(result.cards(), &two_pair[..4]);
}

#[test]
fn jacks_or_better_needs_a_face_pair() {
    let queens = [
        card(Suit::Hearts, 12),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 12),
        card(Suit::Spades, 7),
        card(Suit::Hearts, 9),
    ];
    let result = classify(&queens).unwrap();
    assert_eq!(result.category(), HandCategory::JacksOrBetter);
    assert_eq!(result.multiplier(), 1);
    assert_eq!(
        result.cards(),
        &[card(Suit::Hearts, 12), card(Suit::Clubs, 12)]
    );

    let tens = [
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 7),
        card(Suit::Hearts, 9),
    ];
    assert_eq!(classify(&tens).unwrap().category(), HandCategory::Nothing);
}

#[test]
fn pair_of_aces_pays_nothing() {
    let aces = [
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 7),
        card(Suit::Hearts, 9),
    ];
    let result = classify(&aces).unwrap();

    assert_eq!(result.category(), HandCategory::Nothing);
    assert_eq!(result.multiplier(), 0);
    assert!(result.cards().is_empty());
    assert!(!result.is_winning());
}

#[test]
fn wrong_hand_sizes_are_rejected() {
    let deck: Vec<Card> = Deck::build().iter().copied().collect();

    assert_eq!(
        classify(&deck[..4]).unwrap_err(),
        ClassifyError::InvalidHandSize(4)
    );
    assert_eq!(
        classify(&deck[..6]).unwrap_err(),
        ClassifyError::InvalidHandSize(6)
    );
    assert_eq!(
        classify(&deck[..0]).unwrap_err(),
        ClassifyError::InvalidHandSize(0)
    );
    assert_eq!(
        Hand::from_slice(&deck[..3]).unwrap_err(),
        ClassifyError::InvalidHandSize(3)
    );
}

#[test]
fn pay_table_is_strictly_descending() {
    for pair in PAY_TABLE.windows(2) {
        assert!(pair[0].multiplier() > pair[1].multiplier());
    }
    for category in PAY_TABLE {
        assert_eq!(title_for(category.multiplier()), Some(category.title()));
        assert_eq!(category.to_string(), category.title());
    }
    assert_eq!(title_for(800), Some("Royal Flush"));
    assert_eq!(title_for(1), Some("Jacks or Better"));
    assert_eq!(title_for(10), None);
}

#[test]
fn random_hands_classify_consistently() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..500 {
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);
        let hand = Hand::deal(&mut deck).unwrap();

        let first = classify(hand.cards()).unwrap();
        let second = classify(hand.cards()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, hand.evaluate());

        assert_eq!(title_for(first.multiplier()), Some(first.title()));
        assert_eq!(first.is_winning(), !first.cards().is_empty());
        assert!(first.cards().iter().all(|c| hand.cards().contains(c)));
    }
}

#[test]
fn hold_marks_toggle_and_lock_after_redraw() {
    let mut deck = Deck::build();
    let mut hand = Hand::deal(&mut deck).unwrap();

    assert_eq!(hand.toggle_hold(0), Ok(true));
    assert_eq!(hand.toggle_hold(4), Ok(true));
    assert_eq!(hand.toggle_hold(4), Ok(false));
    assert_eq!(hand.set_held(2, true), Ok(()));
    assert_eq!(hand.held_count(), 2);
    assert_eq!(hand.toggle_hold(5), Err(HoldError::InvalidPosition(5)));

    let replaced = hand.redraw(&mut deck).unwrap();
    assert_eq!(replaced.len(), 3);
    assert_eq!(hand.cards()[0], card(Suit::Hearts, 1));
    assert_eq!(hand.cards()[1], card(Suit::Hearts, 6));
    assert_eq!(hand.cards()[2], card(Suit::Hearts, 3));
    assert_eq!(hand.cards()[3], card(Suit::Hearts, 7));
    assert_eq!(hand.cards()[4], card(Suit::Hearts, 8));
    assert!(hand.is_locked());
    assert!(hand.is_held(0));
    assert!(hand.is_held(2));
    assert!(!hand.is_held(1));
    assert_eq!(hand.held_count(), 2);
    assert_eq!(hand.toggle_hold(0), Err(HoldError::Locked));
}

#[test]
fn locked_hand_cannot_be_redrawn() {
    let mut deck = Deck::build();
    let mut hand = Hand::deal(&mut deck).unwrap();

    hand.redraw(&mut deck).unwrap();
    assert!(hand.is_locked());
    let cards = *hand.cards();
    let remaining = deck.len();

    assert_eq!(hand.redraw(&mut deck), Err(RedrawError::Locked));
    assert_eq!(hand.cards(), &cards);
    assert_eq!(deck.len(), remaining);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "A♥");
    assert_eq!(card(Suit::Spades, 10).to_string(), "10♠");
    assert_eq!(card(Suit::Clubs, 11).to_string(), "J♣");
    assert_eq!(card(Suit::Diamonds, 13).to_string(), "K♦");
}
