use crate::CategoryScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub entries: Vec<CategoryScore>,
    pub total: u32,
}

impl Scorecard {
    /// Orders `scored` by score, highest first. Equal scores stay in the
    /// order they were committed.
    pub fn from_scored(scored: &[CategoryScore]) -> Self {
        let mut entries = scored.to_vec();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        let total = entries.iter().map(|entry| entry.score).sum();
        Self { entries, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn entry(category: Category, score: u32) -> CategoryScore {
        CategoryScore { category, score }
    }

    #[test]
    fn ties_keep_commit_order() {
        let card = Scorecard::from_scored(&[
            entry(Category::Chance, 8),
            entry(Category::Twos, 6),
            entry(Category::ThreeOfAKind, 6),
            entry(Category::Yatzy, 0),
        ]);
        let order: Vec<Category> = card.entries.iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Chance,
                Category::Twos,
                Category::ThreeOfAKind,
                Category::Yatzy
            ]
        );
        assert_eq!(card.total, 20);
    }

    #[test]
    fn ties_do_not_follow_registry_order() {
        let card = Scorecard::from_scored(&[entry(Category::Sixes, 12), entry(Category::Ones, 12)]);
        assert_eq!(card.entries[0].category, Category::Sixes);
        assert_eq!(card.entries[1].category, Category::Ones);
    }
}
