use crate::{scoring, Hand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Yatzy,
    Chance,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Yatzy,
        Category::Chance,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Pair => "pair",
            Category::TwoPairs => "two_pairs",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::FullHouse => "full_house",
            Category::Yatzy => "yatzy",
            Category::Chance => "chance",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::Pair => "Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::FullHouse => "Full House",
            Category::Yatzy => "Yatzy",
            Category::Chance => "Chance",
        }
    }

    /// Accepts the id (`full_house`) or the display name (`Full House`),
    /// ignoring case.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::ALL.into_iter().find(|category| {
            category.id().eq_ignore_ascii_case(name)
                || category.display_name().eq_ignore_ascii_case(name)
        })
    }

    pub fn score(self, hand: &Hand) -> u32 {
        match self {
            Category::Ones => scoring::ones(hand),
            Category::Twos => scoring::twos(hand),
            Category::Threes => scoring::threes(hand),
            Category::Fours => scoring::fours(hand),
            Category::Fives => scoring::fives(hand),
            Category::Sixes => scoring::sixes(hand),
            Category::Pair => scoring::pair(hand),
            Category::TwoPairs => scoring::two_pairs(hand),
            Category::ThreeOfAKind => scoring::three_of_a_kind(hand),
            Category::FourOfAKind => scoring::four_of_a_kind(hand),
            Category::SmallStraight => scoring::small_straight(hand),
            Category::LargeStraight => scoring::large_straight(hand),
            Category::FullHouse => scoring::full_house(hand),
            Category::Yatzy => scoring::yatzy(hand),
            Category::Chance => scoring::chance(hand),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
