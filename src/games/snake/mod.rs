//! Snake minigame.
//!
//! A tick-driven game where the player steers a snake around a 12x12 grid,
//! eating food to grow. The snake speeds up with every point and dies on the
//! walls or its own body.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
