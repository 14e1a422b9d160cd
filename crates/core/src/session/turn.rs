use super::*;
use crate::{scores_in_categories, Die, Event, EventBus};

impl<D: DiceSource> Session<D> {
    pub fn roll(&mut self, events: &mut EventBus) -> Result<Hand, SessionError> {
        if self.phase != Phase::AwaitingRoll {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        events.push(Event::TurnStarted {
            turn: self.turn + 1,
            categories_left: self.available.len(),
        });
        let hand = Hand::roll(&mut self.dice);
        self.hand = Some(hand);
        self.rerolls_left = self.config.rerolls_per_turn;
        self.phase = if self.rerolls_left > 0 {
            Phase::AwaitingReroll
        } else {
            Phase::AwaitingCategory
        };
        events.push(Event::DiceRolled { hand });
        Ok(hand)
    }

    /// Uses up one re-roll offer. An empty `discard` keeps the hand as is.
    pub fn reroll(&mut self, discard: &[Die], events: &mut EventBus) -> Result<Hand, SessionError> {
        if self.phase != Phase::AwaitingReroll {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        if self.rerolls_left == 0 {
            return Err(SessionError::NoRerollsLeft);
        }
        let current = self.current_hand()?;
        let hand = current.reroll(discard, &mut self.dice)?;
        self.hand = Some(hand);
        self.rerolls_left -= 1;
        if self.rerolls_left == 0 {
            self.phase = Phase::AwaitingCategory;
        }
        events.push(Event::DiceRerolled {
            discarded: discard.to_vec(),
            hand,
            rerolls_left: self.rerolls_left,
        });
        Ok(hand)
    }

    /// Scores the current hand against the categories still open.
    pub fn hints(&self) -> Result<Vec<CategoryScore>, SessionError> {
        let hand = self.current_hand()?;
        Ok(scores_in_categories(&hand, &self.available))
    }

    pub fn commit(
        &mut self,
        category: Category,
        events: &mut EventBus,
    ) -> Result<CategoryScore, SessionError> {
        if self.phase != Phase::AwaitingCategory {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        let pos = self
            .available
            .iter()
            .position(|open| *open == category)
            .ok_or(SessionError::CategoryUnavailable(category))?;
        let hand = self.current_hand()?;
        self.available.remove(pos);
        let entry = CategoryScore {
            category,
            score: category.score(&hand),
        };
        self.scored.push(entry);
        self.total += entry.score;
        self.turn += 1;
        self.hand = None;
        events.push(Event::CategoryScored {
            category,
            score: entry.score,
            total: self.total,
        });
        if self.available.is_empty() {
            self.phase = Phase::Complete;
            log::info!("session complete after {} turns, total {}", self.turn, self.total);
            events.push(Event::SessionCompleted { total: self.total });
        } else {
            self.phase = Phase::AwaitingRoll;
        }
        Ok(entry)
    }

    fn current_hand(&self) -> Result<Hand, SessionError> {
        self.hand.ok_or(SessionError::InvalidPhase(self.phase))
    }
}
