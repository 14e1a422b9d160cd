use yatzy_core::{Category, CategoryScore, Scorecard};

const NAME_WIDTH: usize = 18;

pub fn format_hints(ranked: &[CategoryScore]) -> String {
    ranked
        .iter()
        .map(|entry| format!("{} {}", entry.score, entry.category.id()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_available(available: &[Category]) -> String {
    available
        .iter()
        .map(|category| category.id())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_scorecard(scorecard: &Scorecard) -> String {
    let mut out = String::new();
    for entry in &scorecard.entries {
        out.push_str(&format!(
            "{:<width$}{:>3}\n",
            format!("{}:", entry.category.id()),
            entry.score,
            width = NAME_WIDTH
        ));
    }
    out.push_str(&format!("Final Score: {}\n", scorecard.total));
    out
}
