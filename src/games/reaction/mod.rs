//! Reaction Timer minigame.
//!
//! After a random delay the panel turns green; the player responds as fast as
//! possible. Responding before the panel turns green is a false start.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
