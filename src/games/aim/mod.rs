//! Aim Trainer minigame.
//!
//! A target marker jumps around a panel on a fixed interval. Clicking it
//! scores a hit; clicking elsewhere, or letting the marker jump away, counts
//! as a miss.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
