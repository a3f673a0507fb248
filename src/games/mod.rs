//! Playground mini-games: Snake, Aim Trainer, Memory Match, Quiz, Reaction Timer.
//!
//! Each game is a plain state struct (`types.rs`) plus free transition
//! functions (`logic.rs`). Games never reach each other; the playground
//! controller owns all of them and routes ticks and input to the active one.

pub mod aim;
pub mod grid;
pub mod memory;
pub mod quiz;
pub mod reaction;
pub mod snake;
pub mod timer;

pub use aim::{AimGame, AimInput, TargetPosition};
pub use grid::Cell;
pub use memory::{CardFace, MemoryCard, MemoryGame, MemoryInput};
pub use quiz::{QuizFeedback, QuizGame, QuizInput, QuizQuestion};
pub use reaction::{ReactionGame, ReactionInput, ReactionOutcome, ReactionStatus};
pub use snake::{CellView, Direction, SnakeGame, SnakeInput, SnakeStatus};
pub use timer::{MillisClock, Timer};

/// Hooks the playground calls when a game's tab loses or regains focus.
///
/// After `suspend` no timer owned by the game may fire until `resume`.
pub trait Lifecycle {
    /// Cancel periodic timers and settle or cancel pending one-shots.
    fn suspend(&mut self);
    /// Re-arm periodic timers for a game that is still running.
    fn resume(&mut self);
}
