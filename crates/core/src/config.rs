use crate::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const DEFAULT_REROLLS_PER_TURN: u8 = 2;

/// Classic presentation order for the category hint list.
pub const DEFAULT_CATEGORY_ORDER: [Category; 15] = [
    Category::Yatzy,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::ThreeOfAKind,
    Category::TwoPairs,
    Category::Pair,
    Category::SmallStraight,
    Category::LargeStraight,
    Category::Ones,
    Category::Twos,
    Category::Threes,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
    Category::Chance,
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ruleset has no categories")]
    NoCategories,
    #[error("category {0} is listed more than once")]
    DuplicateCategory(Category),
}

fn default_rerolls() -> u8 {
    DEFAULT_REROLLS_PER_TURN
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Vec<Category>,
    #[serde(default = "default_rerolls")]
    pub rerolls_per_turn: u8,
}

impl GameConfig {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut seen = HashSet::new();
        for &category in &self.categories {
            if !seen.insert(category) {
                return Err(ConfigError::DuplicateCategory(category));
            }
        }
        Ok(())
    }

    pub fn turns(&self) -> usize {
        self.categories.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORY_ORDER.to_vec(),
            rerolls_per_turn: DEFAULT_REROLLS_PER_TURN,
        }
    }
}
