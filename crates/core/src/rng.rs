use crate::{Die, DieError, FACES};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use thiserror::Error;

/// Where dice values come from. Sessions only ever see this trait, so tests
/// can swap the seeded RNG for a fixed script.
pub trait DiceSource {
    fn roll_die(&mut self) -> Die;

    fn roll_dice(&mut self, count: usize) -> Vec<Die> {
        (0..count).map(|_| self.roll_die()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for RngState {
    fn roll_die(&mut self) -> Die {
        let face = self.rng.gen_range(1..=FACES);
        Die::ALL[(face - 1) as usize]
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("dice script is empty")]
    Empty,
    #[error("invalid scripted die: {0}")]
    Die(#[from] DieError),
}

/// Replays a fixed list of faces, starting over once the list runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<Die>,
    next: usize,
    drawn: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<Die>) -> Result<Self, ScriptError> {
        if faces.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self {
            faces,
            next: 0,
            drawn: 0,
        })
    }

    pub fn from_values(values: &[u8]) -> Result<Self, ScriptError> {
        Self::new(crate::dice_from_values(values)?)
    }

    /// Total number of dice handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> Die {
        let die = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        self.drawn += 1;
        die
    }
}
