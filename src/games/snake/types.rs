//! Snake game data structures.

use crate::constants::{
    GRID_SIZE, SNAKE_BASE_PERIOD_MS, SNAKE_INITIAL_FOOD, SNAKE_MIN_PERIOD_MS,
    SNAKE_PERIOD_STEP_MS,
};
use crate::games::grid::{all_cells, Cell};
use crate::games::timer::Timer;
use std::collections::VecDeque;

/// Seed body, head first. Used on construction and on every restart.
pub const SNAKE_SEED: [Cell; 3] = [Cell::new(5, 5), Cell::new(5, 6), Cell::new(5, 7)];

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit vector for this direction. `y` grows downwards.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Lifecycle of a snake round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    /// Waiting for the first direction key or Play.
    Idle,
    Running,
    /// Hit a wall or itself. Only a restart leaves this state.
    Over,
}

/// What occupies a grid cell, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Head,
    Body,
    Food,
}

/// Movement period for a given score: `max(80, 170 - 8 * score)` milliseconds.
pub fn tick_period_ms(score: u32) -> u64 {
    SNAKE_BASE_PERIOD_MS
        .saturating_sub(SNAKE_PERIOD_STEP_MS.saturating_mul(score as u64))
        .max(SNAKE_MIN_PERIOD_MS)
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Body segments. Head is at the front (index 0).
    pub snake: VecDeque<Cell>,
    /// None once the board is full.
    pub food: Option<Cell>,
    pub direction: Direction,
    pub status: SnakeStatus,
    pub score: u32,
    pub grid_size: i16,
    /// Movement steps taken this round.
    pub tick_count: u64,
    pub(crate) tick_timer: Timer,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    /// A fresh idle game with the seed body and the fixed opening food cell.
    pub fn new() -> Self {
        let (fx, fy) = SNAKE_INITIAL_FOOD;
        Self {
            snake: seed_body(),
            food: Some(Cell::new(fx, fy)),
            direction: Direction::Up,
            status: SnakeStatus::Idle,
            score: 0,
            grid_size: GRID_SIZE,
            tick_count: 0,
            tick_timer: Timer::disarmed(),
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn is_running(&self) -> bool {
        self.status == SnakeStatus::Running
    }

    /// Current movement period derived from the score.
    pub fn tick_period_ms(&self) -> u64 {
        tick_period_ms(self.score)
    }

    /// True while the movement timer is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.tick_timer.is_armed()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn cell_view(&self, cell: Cell) -> CellView {
        if self.head() == cell {
            CellView::Head
        } else if self.occupies(cell) {
            CellView::Body
        } else if self.food == Some(cell) {
            CellView::Food
        } else {
            CellView::Empty
        }
    }

    /// Row-major occupancy of the whole grid.
    pub fn occupancy(&self) -> Vec<Vec<CellView>> {
        let size = self.grid_size.max(0) as usize;
        let mut rows = vec![vec![CellView::Empty; size]; size];
        for cell in all_cells(self.grid_size) {
            rows[cell.y as usize][cell.x as usize] = self.cell_view(cell);
        }
        rows
    }

    /// Label for the Play button: "Restart" mid-round, "Play" otherwise.
    pub fn action_label(&self) -> &'static str {
        if self.is_running() {
            "Restart"
        } else {
            "Play"
        }
    }
}

pub(crate) fn seed_body() -> VecDeque<Cell> {
    SNAKE_SEED.iter().copied().collect()
}
