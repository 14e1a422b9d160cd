use crate::{
    Category, CategoryScore, ConfigError, DiceSource, GameConfig, Hand, HandError, RngState,
    Scorecard,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod turn;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no re-rolls left this turn")]
    NoRerollsLeft,
    #[error("category {0} is not available")]
    CategoryUnavailable(Category),
    #[error("invalid re-roll selection: {0}")]
    Selection(#[from] HandError),
    #[error("player left the game")]
    Abandoned,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoll,
    AwaitingReroll,
    AwaitingCategory,
    Complete,
}

/// One single-player game: the categories left to fill, what has been
/// scored so far and the dice of the turn in progress.
#[derive(Debug)]
pub struct Session<D: DiceSource = RngState> {
    config: GameConfig,
    dice: D,
    available: Vec<Category>,
    scored: Vec<CategoryScore>,
    total: u32,
    hand: Option<Hand>,
    rerolls_left: u8,
    phase: Phase,
    turn: usize,
}

impl<D: DiceSource> Session<D> {
    pub fn new(config: GameConfig, dice: D) -> Result<Self, SessionError> {
        config.validate()?;
        let available = config.categories.clone();
        Ok(Self {
            config,
            dice,
            available,
            scored: Vec::new(),
            total: 0,
            hand: None,
            rerolls_left: 0,
            phase: Phase::AwaitingRoll,
            turn: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn available(&self) -> &[Category] {
        &self.available
    }

    pub fn is_available(&self, category: Category) -> bool {
        self.available.contains(&category)
    }

    pub fn scored(&self) -> &[CategoryScore] {
        &self.scored
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn rerolls_left(&self) -> u8 {
        self.rerolls_left
    }

    /// Turns committed so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn dice_source(&self) -> &D {
        &self.dice
    }

    pub fn scorecard(&self) -> Result<Scorecard, SessionError> {
        if self.phase != Phase::Complete {
            return Err(SessionError::InvalidPhase(self.phase));
        }
        Ok(Scorecard::from_scored(&self.scored))
    }
}
