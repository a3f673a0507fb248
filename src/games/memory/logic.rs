//! Memory Match logic: flipping, pair resolution and the mismatch delay.

use super::types::*;
use crate::constants::{MEMORY_COLUMNS, MEMORY_MISMATCH_DELAY_MS};
use crate::games::timer::Timer;
use crate::games::Lifecycle;
use rand::Rng;

/// UI-agnostic input actions for Memory Match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryInput {
    Flip(usize),
    Up,
    Down,
    Left,
    Right,
    /// Flip the card under the cursor.
    Select,
    Reset,
}

pub fn process_input<R: Rng>(game: &mut MemoryGame, input: MemoryInput, rng: &mut R) {
    match input {
        MemoryInput::Flip(index) => {
            game.cursor = index.min(game.cards.len().saturating_sub(1));
            flip(game, index);
        }
        MemoryInput::Up => move_cursor(game, 0, -1),
        MemoryInput::Down => move_cursor(game, 0, 1),
        MemoryInput::Left => move_cursor(game, -1, 0),
        MemoryInput::Right => move_cursor(game, 1, 0),
        MemoryInput::Select => {
            let index = game.cursor;
            flip(game, index);
        }
        MemoryInput::Reset => reset_memory(game, rng),
    }
}

/// Turn a card face up. Returns true if the card was flipped.
///
/// Ignored while two cards are already up, or when the card is matched,
/// already up, or out of range. The second card of a pair counts a move and
/// resolves the pair.
pub fn flip(game: &mut MemoryGame, index: usize) -> bool {
    if game.flipped.len() >= 2 || game.flipped.contains(&index) {
        return false;
    }
    match game.cards.get(index) {
        Some(card) if !card.matched => {}
        _ => return false,
    }

    game.flipped.push(index);
    if game.flipped.len() == 2 {
        game.moves += 1;
        resolve_pair(game);
    }
    true
}

/// Settle two face-up cards: a match locks them, a mismatch schedules the flip back.
fn resolve_pair(game: &mut MemoryGame) {
    let (a, b) = (game.flipped[0], game.flipped[1]);
    if game.cards[a].symbol == game.cards[b].symbol {
        game.cards[a].matched = true;
        game.cards[b].matched = true;
        game.flipped.clear();
        if game.cards.iter().all(|c| c.matched) {
            game.complete = true;
            log::debug!("memory: deck cleared in {} moves", game.moves);
        }
    } else {
        game.revert_timer = Timer::once(MEMORY_MISMATCH_DELAY_MS);
    }
}

/// Advance by `dt_ms`. Returns true if a mismatched pair turned back over.
pub fn tick_memory(game: &mut MemoryGame, dt_ms: u64) -> bool {
    game.revert_timer.advance(dt_ms);
    if game.revert_timer.poll() {
        game.flipped.clear();
        return true;
    }
    false
}

/// New shuffle, nothing flipped, zero moves. Cancels a pending flip-back.
pub fn reset_memory<R: Rng>(game: &mut MemoryGame, rng: &mut R) {
    game.revert_timer.cancel();
    game.cards = shuffled_deck(&game.symbols, rng);
    game.flipped.clear();
    game.moves = 0;
    game.complete = false;
    game.cursor = 0;
}

fn move_cursor(game: &mut MemoryGame, dx: i32, dy: i32) {
    if game.cards.is_empty() {
        return;
    }
    let cols = MEMORY_COLUMNS as i32;
    let rows = game.rows() as i32;
    let col = (game.cursor as i32 % cols + dx).clamp(0, cols - 1);
    let row = (game.cursor as i32 / cols + dy).clamp(0, rows - 1);
    let index = (row * cols + col) as usize;
    game.cursor = index.min(game.cards.len() - 1);
}

impl Lifecycle for MemoryGame {
    /// A pending flip-back is applied immediately so the board is never left
    /// stuck with two unresolved cards.
    fn suspend(&mut self) {
        if self.revert_timer.is_armed() {
            self.revert_timer.cancel();
            self.flipped.clear();
        }
    }

    fn resume(&mut self) {}
}
