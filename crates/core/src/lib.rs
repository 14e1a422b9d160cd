//! Core Yatzy rules and turn loop. Keep this crate free of IO and platform concerns.

pub mod category;
pub mod config;
pub mod dice;
pub mod events;
pub mod hand;
pub mod player;
pub mod rng;
pub mod scorecard;
pub mod scoring;
pub mod session;

pub use category::*;
pub use config::*;
pub use dice::*;
pub use events::*;
pub use hand::*;
pub use player::*;
pub use rng::*;
pub use scorecard::*;
pub use scoring::*;
pub use session::*;
