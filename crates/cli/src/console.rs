use crate::input::{parse_category, parse_reroll};
use crate::view::{format_available, format_hints, format_scorecard};
use std::fmt::Display;
use std::io::{BufRead, Write};
use yatzy_core::{Category, CategoryScore, Die, Hand, Player, Scorecard};

/// Plays through a line based terminal. Bad input is reported and asked
/// again; end of input leaves the game.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) {
        let _ = writeln!(self.output, "{text}");
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();
        let mut line = String::new();
        if self.input.read_line(&mut line).ok()? == 0 {
            return None;
        }
        Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Keeps asking until `parse` accepts the line.
    fn ask<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> Option<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Some(value),
                Err(err) => {
                    log::warn!("rejected input {line:?}: {err}");
                    self.say(format!("{err}. {hint}"));
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn show_roll(&mut self, hand: &Hand, rerolls_left: u8) {
        self.say(format!("Your roll is: {hand} ({rerolls_left} re-rolls left)"));
    }

    fn choose_reroll(&mut self, hand: &Hand, _rerolls_left: u8) -> Option<Vec<Die>> {
        self.ask(
            "Which dice will you re-roll? ",
            "Please enter a comma separated list of dice, eg 1,2",
            |line| parse_reroll(line, hand),
        )
    }

    fn show_scores(&mut self, ranked: &[CategoryScore]) {
        self.say(format!("Hint: {}", format_hints(ranked)));
    }

    fn choose_category(&mut self, _hand: &Hand, available: &[Category]) -> Option<Category> {
        let hint = format!("Choose one of: {}", format_available(available));
        self.ask(
            "Which category would you like to score this roll in? ",
            &hint,
            |line| parse_category(line, available),
        )
    }

    fn show_total(&mut self, total: u32) {
        self.say(format!("Your score is now {total}"));
    }

    fn show_scorecard(&mut self, scorecard: &Scorecard) {
        let text = format_scorecard(scorecard);
        let _ = write!(self.output, "{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatzy_core::{play, EventBus, GameConfig, ScriptedDice, Session, SessionError};

    fn console(script: &str) -> ConsolePlayer<&[u8], Vec<u8>> {
        ConsolePlayer::new(script.as_bytes(), Vec::new())
    }

    fn hand(values: [u8; 5]) -> Hand {
        Hand::from_values(&values).expect("hand")
    }

    #[test]
    fn reroll_prompt_repeats_until_valid() {
        let mut player = console("x\n6\n1,2\n");
        let chosen = player.choose_reroll(&hand([1, 2, 3, 4, 5]), 2).expect("choice");
        assert_eq!(chosen.iter().map(|d| d.value()).collect::<Vec<_>>(), vec![1, 2]);
        let text = String::from_utf8(player.into_output()).expect("utf8");
        assert!(text.contains("invalid die 'x'"));
        assert!(text.contains("cannot re-roll 6"));
    }

    #[test]
    fn category_prompt_repeats_until_open_category() {
        let mut player = console("yatzy\nchance\n");
        let chosen = player.choose_category(&hand([1, 1, 1, 1, 1]), &[Category::Chance]);
        assert_eq!(chosen, Some(Category::Chance));
        let text = String::from_utf8(player.into_output()).expect("utf8");
        assert!(text.contains("Choose one of: chance"));
    }

    #[test]
    fn end_of_input_walks_away() {
        let mut player = console("bogus\n");
        assert_eq!(player.choose_category(&hand([1, 2, 3, 4, 5]), &[Category::Ones]), None);
    }

    #[test]
    fn plays_a_short_game_from_a_script() {
        let config = GameConfig::with_categories(vec![Category::Sixes, Category::Chance]);
        let dice = ScriptedDice::from_values(&[6, 6, 6, 1, 2]).expect("script");
        let mut session = Session::new(config, dice).expect("session");
        let mut player = console("1,2\n\nsixes\n\n\nchance\n");
        let mut events = EventBus::default();
        let card = play(&mut session, &mut player, &mut events).expect("play");
        assert_eq!(card.total, session.total());
        let text = String::from_utf8(player.into_output()).expect("utf8");
        assert!(text.contains("Final Score:"));
        assert!(text.contains("Your score is now"));
    }

    #[test]
    fn abandoning_mid_game_is_reported() {
        let dice = ScriptedDice::from_values(&[3]).expect("script");
        let mut session = Session::new(GameConfig::default(), dice).expect("session");
        let mut player = console("\n");
        let mut events = EventBus::default();
        assert!(matches!(
            play(&mut session, &mut player, &mut events),
            Err(SessionError::Abandoned)
        ));
    }
}
