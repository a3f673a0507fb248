//! Memory Match minigame.
//!
//! Twelve face-down cards hold six symbol pairs. The player flips two at a
//! time; equal symbols stay face up, unequal ones turn back after a short
//! delay.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
