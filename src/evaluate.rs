//! Hand classification against the pay table.
//!
//! Categories overlap (every straight flush is also a flush and a straight),
//! so they are tried in [`PAY_TABLE`](crate::paytable::PAY_TABLE) order and
//! the first match wins.

use core::cmp::Reverse;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{ACE, Card, JACK, KING, QUEEN};
use crate::error::ClassifyError;
use crate::hand::HAND_SIZE;
use crate::paytable::HandCategory;
use crate::result::WinningHand;

/// Returns the cards that make the category, or `None` if the hand misses it.
type Matcher = fn(&[Card; HAND_SIZE]) -> Option<Vec<Card>>;

const RULES: [(HandCategory, Matcher); 9] = [
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::JacksOrBetter, jacks_or_better),
];

const ROYAL_RANKS: [u8; HAND_SIZE] = [ACE, 10, JACK, QUEEN, KING];

/// Classifies a five card hand.
///
/// Card order does not matter. The returned [`WinningHand`] holds only the
/// cards that make the category: the four of a kind without its kicker, both
/// pairs of a two pair, and so on.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidHandSize`] unless exactly five cards are
/// given.
///
/// # Example
///
/// ```
/// use drawpoker::{Card, HandCategory, Suit, classify};
///
/// let hand = [
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Clubs, 4),
///     Card::new(Suit::Diamonds, 4),
///     Card::new(Suit::Hearts, 4),
/// ];
/// let result = classify(&hand).unwrap();
/// assert_eq!(result.category(), HandCategory::FullHouse);
/// assert_eq!(result.multiplier(), 9);
/// ```
pub fn classify(cards: &[Card]) -> Result<WinningHand, ClassifyError> {
    let hand: &[Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| ClassifyError::InvalidHandSize(cards.len()))?;
    Ok(evaluate(hand))
}

pub(crate) fn evaluate(cards: &[Card; HAND_SIZE]) -> WinningHand {
    RULES
        .iter()
        .find_map(|(category, matcher)| {
            matcher(cards).map(|winning| WinningHand::new(*category, winning))
        })
        .unwrap_or_else(WinningHand::nothing)
}

/// Groups cards by rank, largest group first.
///
/// Groups of equal size keep the order in which their rank first appears.
fn rank_groups(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut by_rank: HashMap<u8, (usize, Vec<Card>)> = HashMap::new();
    for (position, card) in cards.iter().enumerate() {
        by_rank
            .entry(card.rank())
            .or_insert_with(|| (position, Vec::new()))
            .1
            .push(*card);
    }

    let mut groups: Vec<(usize, Vec<Card>)> = by_rank.into_values().collect();
    groups.sort_by_key(|(first_seen, group)| (Reverse(group.len()), *first_seen));
    groups.into_iter().map(|(_, group)| group).collect()
}

fn sorted_by_rank(cards: &[Card; HAND_SIZE]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(Card::rank);
    sorted
}

fn same_suit(cards: &[Card; HAND_SIZE]) -> bool {
    let suit = cards[0].suit();
    cards.iter().all(|card| card.suit() == suit)
}

// No wraparound: ace is always rank 1, so 10-J-Q-K-A is not a run.
fn is_run(sorted: &[Card]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[1].rank().checked_sub(pair[0].rank()) == Some(1))
}

fn royal_flush(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    let has_each_rank = ROYAL_RANKS
        .iter()
        .all(|&rank| cards.iter().filter(|card| card.rank() == rank).count() == 1);
    (same_suit(cards) && has_each_rank).then(|| cards.to_vec())
}

fn straight_flush(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    if !same_suit(cards) {
        return None;
    }
    straight(cards)
}

fn four_of_a_kind(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    rank_groups(cards).into_iter().find(|group| group.len() == 4)
}

fn full_house(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    let groups = rank_groups(cards);
    let is_full = groups.len() == 2 && groups[0].len() == 3 && groups[1].len() == 2;
    is_full.then(|| groups.concat())
}

fn flush(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    same_suit(cards).then(|| cards.to_vec())
}

fn straight(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    let sorted = sorted_by_rank(cards);
    is_run(&sorted).then_some(sorted)
}

fn three_of_a_kind(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    rank_groups(cards).into_iter().find(|group| group.len() == 3)
}

fn two_pair(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    let pairs: Vec<Vec<Card>> = rank_groups(cards)
        .into_iter()
        .filter(|group| group.len() == 2)
        .collect();
    (pairs.len() == 2).then(|| pairs.concat())
}

// Aces rank 1, so a pair of aces does not qualify.
fn jacks_or_better(cards: &[Card; HAND_SIZE]) -> Option<Vec<Card>> {
    let faces: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|card| card.rank() >= JACK)
        .collect();

    let mut pairs = rank_groups(&faces)
        .into_iter()
        .filter(|group| group.len() == 2);
    match (pairs.next(), pairs.next()) {
        (Some(pair), None) => Some(pair),
        _ => None,
    }
}
