//! Category rules. Every rule is a pure function of the hand.

use crate::{Category, Die, Hand};
use serde::{Deserialize, Serialize};

const YATZY_SCORE: u32 = 50;
const SMALL_STRAIGHT: [u8; 5] = [1, 2, 3, 4, 5];
const LARGE_STRAIGHT: [u8; 5] = [2, 3, 4, 5, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

fn upper(hand: &Hand, face: usize) -> u32 {
    let die = Die::ALL[face - 1];
    hand.counts().get(die) as u32 * die.value() as u32
}

// Highest face that shows at least `size` times wins.
fn of_a_kind(hand: &Hand, size: u8) -> u32 {
    hand.counts()
        .high_to_low()
        .find(|(_, count)| *count >= size)
        .map(|(face, _)| size as u32 * face.value() as u32)
        .unwrap_or(0)
}

pub fn ones(hand: &Hand) -> u32 {
    upper(hand, 1)
}

pub fn twos(hand: &Hand) -> u32 {
    upper(hand, 2)
}

pub fn threes(hand: &Hand) -> u32 {
    upper(hand, 3)
}

pub fn fours(hand: &Hand) -> u32 {
    upper(hand, 4)
}

pub fn fives(hand: &Hand) -> u32 {
    upper(hand, 5)
}

pub fn sixes(hand: &Hand) -> u32 {
    upper(hand, 6)
}

pub fn pair(hand: &Hand) -> u32 {
    of_a_kind(hand, 2)
}

pub fn three_of_a_kind(hand: &Hand) -> u32 {
    of_a_kind(hand, 3)
}

pub fn four_of_a_kind(hand: &Hand) -> u32 {
    of_a_kind(hand, 4)
}

/// Scores only when exactly two distinct faces show at least twice, so four
/// of a kind scores zero here.
pub fn two_pairs(hand: &Hand) -> u32 {
    let pairs: Vec<u32> = hand
        .counts()
        .high_to_low()
        .filter(|(_, count)| *count >= 2)
        .map(|(face, _)| face.value() as u32)
        .collect();
    match pairs.as_slice() {
        [high, low] => 2 * high + 2 * low,
        _ => 0,
    }
}

pub fn small_straight(hand: &Hand) -> u32 {
    if hand.values() == SMALL_STRAIGHT {
        hand.sum()
    } else {
        0
    }
}

pub fn large_straight(hand: &Hand) -> u32 {
    if hand.values() == LARGE_STRAIGHT {
        hand.sum()
    } else {
        0
    }
}

pub fn full_house(hand: &Hand) -> u32 {
    let counts = hand.counts();
    if counts.contains_count(2) && counts.contains_count(3) {
        hand.sum()
    } else {
        0
    }
}

pub fn yatzy(hand: &Hand) -> u32 {
    if hand.counts().contains_count(5) {
        YATZY_SCORE
    } else {
        0
    }
}

pub fn chance(hand: &Hand) -> u32 {
    hand.sum()
}

/// Scores `hand` in every category and orders the result by score, highest
/// first. Ties keep the order of `categories`.
pub fn scores_in_categories(hand: &Hand, categories: &[Category]) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = categories
        .iter()
        .map(|&category| CategoryScore {
            category,
            score: category.score(hand),
        })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
