//! Profile Quiz minigame: a short multiple-choice question bank.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
