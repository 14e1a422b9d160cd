use crate::{Die, DieError, DiceSource, FACES};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("a hand holds exactly 5 dice, got {0}")]
    WrongDiceCount(usize),
    #[error("invalid die: {0}")]
    Die(#[from] DieError),
    #[error("cannot re-roll {0}: not enough of that face in the hand")]
    NotInHand(Die),
}

/// Five dice, always kept sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Die>", into = "Vec<Die>")]
pub struct Hand {
    dice: [Die; HAND_SIZE],
}

impl Hand {
    pub fn new(mut dice: [Die; HAND_SIZE]) -> Self {
        dice.sort();
        Self { dice }
    }

    pub fn from_dice(dice: &[Die]) -> Result<Self, HandError> {
        let dice: [Die; HAND_SIZE] = dice
            .try_into()
            .map_err(|_| HandError::WrongDiceCount(dice.len()))?;
        Ok(Self::new(dice))
    }

    pub fn from_values(values: &[u8]) -> Result<Self, HandError> {
        let dice = crate::dice_from_values(values)?;
        Self::from_dice(&dice)
    }

    pub fn roll(source: &mut impl DiceSource) -> Self {
        let mut dice = [Die::ALL[0]; HAND_SIZE];
        for slot in &mut dice {
            *slot = source.roll_die();
        }
        Self::new(dice)
    }

    pub fn dice(&self) -> &[Die; HAND_SIZE] {
        &self.dice
    }

    pub fn values(&self) -> [u8; HAND_SIZE] {
        self.dice.map(Die::value)
    }

    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|die| die.value() as u32).sum()
    }

    pub fn counts(&self) -> FaceCounts {
        FaceCounts::of(&self.dice)
    }

    /// Discards one die per entry of `discard` and replaces them with fresh
    /// dice from `source`. An empty selection returns the hand unchanged.
    pub fn reroll(&self, discard: &[Die], source: &mut impl DiceSource) -> Result<Self, HandError> {
        let mut kept: Vec<Die> = self.dice.to_vec();
        for die in discard {
            let pos = kept
                .iter()
                .position(|held| held == die)
                .ok_or(HandError::NotInHand(*die))?;
            kept.remove(pos);
        }
        if kept.len() == HAND_SIZE {
            return Ok(*self);
        }
        kept.extend(source.roll_dice(discard.len()));
        Self::from_dice(&kept)
    }
}

impl TryFrom<Vec<Die>> for Hand {
    type Error = HandError;

    fn try_from(dice: Vec<Die>) -> Result<Self, Self::Error> {
        Hand::from_dice(&dice)
    }
}

impl From<Hand> for Vec<Die> {
    fn from(hand: Hand) -> Self {
        hand.dice.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, die) in self.dice.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{die}")?;
        }
        write!(f, "]")
    }
}

/// How many dice show each face. Faces that do not appear count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCounts {
    counts: [u8; FACES as usize],
}

impl FaceCounts {
    pub fn of(dice: &[Die]) -> Self {
        let mut counts = [0u8; FACES as usize];
        for die in dice {
            counts[(die.value() - 1) as usize] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, face: Die) -> u8 {
        self.counts[(face.value() - 1) as usize]
    }

    /// Faces paired with their counts, highest face first.
    pub fn high_to_low(&self) -> impl Iterator<Item = (Die, u8)> + '_ {
        Die::ALL.iter().rev().map(move |&face| (face, self.get(face)))
    }

    pub fn contains_count(&self, count: u8) -> bool {
        self.counts.contains(&count)
    }
}

/// Checks that `selection` can be taken out of `hand` one die at a time.
pub fn selection_in_hand(hand: &Hand, selection: &[Die]) -> Result<(), HandError> {
    let available = hand.counts();
    let requested = FaceCounts::of(selection);
    for face in Die::ALL {
        if requested.get(face) > available.get(face) {
            return Err(HandError::NotInHand(face));
        }
    }
    Ok(())
}
