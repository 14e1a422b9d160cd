use yatzy_core::{selection_in_hand, Category, Die, Hand};

/// Parses a comma separated list of faces such as `1,2`. Blank input means
/// "keep everything"; numbers outside 1..=6 are dropped.
pub fn parse_dice_list(line: &str) -> Result<Vec<Die>, String> {
    let mut dice = Vec::new();
    for part in line.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let value = part
            .parse::<i64>()
            .map_err(|_| format!("invalid die '{part}'"))?;
        match u8::try_from(value).ok().and_then(|v| Die::new(v).ok()) {
            Some(die) => dice.push(die),
            None => log::warn!("ignoring out-of-range die {value}"),
        }
    }
    Ok(dice)
}

pub fn parse_reroll(line: &str, hand: &Hand) -> Result<Vec<Die>, String> {
    let dice = parse_dice_list(line)?;
    selection_in_hand(hand, &dice).map_err(|err| err.to_string())?;
    Ok(dice)
}

pub fn parse_category(line: &str, available: &[Category]) -> Result<Category, String> {
    let name = line.trim();
    if name.is_empty() {
        return Err("missing category".to_string());
    }
    let category = name.parse::<Category>().map_err(|err| err.to_string())?;
    if !available.contains(&category) {
        return Err(format!("category {category} has already been used"));
    }
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(dice: &[Die]) -> Vec<u8> {
        dice.iter().map(|die| die.value()).collect()
    }

    fn hand(values: [u8; 5]) -> Hand {
        Hand::from_values(&values).expect("hand")
    }

    #[test]
    fn parses_comma_separated_faces() {
        assert_eq!(parse_dice_list("1").map(|d| values(&d)), Ok(vec![1]));
        assert_eq!(parse_dice_list("1,2").map(|d| values(&d)), Ok(vec![1, 2]));
        assert_eq!(parse_dice_list(" 3 , 3 ").map(|d| values(&d)), Ok(vec![3, 3]));
    }

    #[test]
    fn blank_input_keeps_everything() {
        assert_eq!(parse_dice_list(""), Ok(Vec::new()));
        assert_eq!(parse_dice_list("  "), Ok(Vec::new()));
    }

    #[test]
    fn out_of_range_faces_are_dropped() {
        assert_eq!(parse_dice_list("0,7,2,-1").map(|d| values(&d)), Ok(vec![2]));
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert_eq!(parse_dice_list("1,x"), Err("invalid die 'x'".to_string()));
    }

    #[test]
    fn reroll_must_come_from_the_hand() {
        let held = hand([1, 2, 3, 4, 5]);
        assert_eq!(parse_reroll("1,5", &held).map(|d| values(&d)), Ok(vec![1, 5]));
        assert!(parse_reroll("6", &held).is_err());
        assert!(parse_reroll("1,1", &held).is_err());
    }

    #[test]
    fn category_must_be_known_and_open() {
        let open = [Category::Chance, Category::FullHouse];
        assert_eq!(parse_category("chance", &open), Ok(Category::Chance));
        assert_eq!(parse_category("Full House", &open), Ok(Category::FullHouse));
        assert!(parse_category("yatzy", &open)
            .unwrap_err()
            .contains("already been used"));
        assert!(parse_category("bogus", &open)
            .unwrap_err()
            .contains("unknown category"));
        assert!(parse_category("", &open).is_err());
    }
}
