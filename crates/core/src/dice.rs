use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const FACES: u8 = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DieError {
    #[error("die value {0} is outside 1..=6")]
    OutOfRange(u8),
}

/// A single die face in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    pub const ALL: [Die; 6] = [Die(1), Die(2), Die(3), Die(4), Die(5), Die(6)];

    pub fn new(value: u8) -> Result<Self, DieError> {
        if (1..=FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DieError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = DieError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Die::new(value)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> Self {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn dice_from_values(values: &[u8]) -> Result<Vec<Die>, DieError> {
    values.iter().copied().map(Die::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_face() {
        for value in 1..=6 {
            assert_eq!(Die::new(value).map(Die::value), Ok(value));
        }
    }

    #[test]
    fn rejects_out_of_range_faces() {
        assert_eq!(Die::new(0), Err(DieError::OutOfRange(0)));
        assert_eq!(Die::new(7), Err(DieError::OutOfRange(7)));
    }

    #[test]
    fn deserializing_checks_range() {
        let die: Die = serde_json::from_str("4").expect("parse");
        assert_eq!(die.value(), 4);
        assert!(serde_json::from_str::<Die>("9").is_err());
    }
}
