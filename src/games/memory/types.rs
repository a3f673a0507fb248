//! Memory Match data structures.

use crate::constants::MEMORY_COLUMNS;
use crate::games::timer::Timer;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    /// Position in the unshuffled deck. Stable for the card's lifetime.
    pub id: usize,
    pub symbol: String,
    pub matched: bool,
}

/// How a card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    Hidden,
    /// Face up, waiting to be resolved.
    Revealed(&'a str),
    Matched(&'a str),
}

/// Build a deck holding every symbol twice, ids in deck order, then shuffle it.
pub fn shuffled_deck<R: Rng>(symbols: &[String], rng: &mut R) -> Vec<MemoryCard> {
    let mut deck: Vec<MemoryCard> = symbols
        .iter()
        .chain(symbols.iter())
        .enumerate()
        .map(|(id, symbol)| MemoryCard {
            id,
            symbol: symbol.clone(),
            matched: false,
        })
        .collect();
    deck.shuffle(rng);
    deck
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub symbols: Vec<String>,
    pub cards: Vec<MemoryCard>,
    /// Indices of face-up unmatched cards, in flip order. Never more than two.
    pub flipped: Vec<usize>,
    pub moves: u32,
    pub complete: bool,
    /// Keyboard selection.
    pub cursor: usize,
    pub(crate) revert_timer: Timer,
}

impl MemoryGame {
    pub fn new<R: Rng>(symbols: Vec<String>, rng: &mut R) -> Self {
        let cards = shuffled_deck(&symbols, rng);
        Self {
            symbols,
            cards,
            flipped: Vec::with_capacity(2),
            moves: 0,
            complete: false,
            cursor: 0,
            revert_timer: Timer::disarmed(),
        }
    }

    pub fn face(&self, index: usize) -> CardFace<'_> {
        match self.cards.get(index) {
            Some(card) if card.matched => CardFace::Matched(&card.symbol),
            Some(card) if self.flipped.contains(&index) => CardFace::Revealed(&card.symbol),
            _ => CardFace::Hidden,
        }
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// True while a mismatched pair is waiting to turn back over.
    pub fn is_reverting(&self) -> bool {
        self.revert_timer.is_armed()
    }

    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(MEMORY_COLUMNS)
    }
}
