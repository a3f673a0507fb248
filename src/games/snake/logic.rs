//! Snake game logic: steering, movement, growth and collision.

use super::types::*;
use crate::games::grid::{in_bounds, random_free_cell};
use crate::games::timer::Timer;
use crate::games::Lifecycle;
use rand::Rng;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// Play / Restart button.
    Start,
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut SnakeGame, input: SnakeInput, rng: &mut R) {
    match input {
        SnakeInput::Up => {
            steer(game, Direction::Up);
        }
        SnakeInput::Down => {
            steer(game, Direction::Down);
        }
        SnakeInput::Left => {
            steer(game, Direction::Left);
        }
        SnakeInput::Right => {
            steer(game, Direction::Right);
        }
        SnakeInput::Start => restart_snake(game, rng),
    }
}

/// Request a new heading. Returns true if the stored direction changed.
///
/// A reversal onto the snake's own neck is rejected. Any direction key
/// starts an idle game. Input after game over is ignored.
pub fn steer(game: &mut SnakeGame, requested: Direction) -> bool {
    if game.status == SnakeStatus::Over {
        return false;
    }

    let changed = requested != game.direction.opposite() && requested != game.direction;
    if requested != game.direction.opposite() {
        game.direction = requested;
    }

    if game.status == SnakeStatus::Idle {
        game.status = SnakeStatus::Running;
        game.tick_timer = Timer::repeating(game.tick_period_ms());
        log::debug!("snake: started heading {:?}", game.direction);
    }

    changed
}

/// Reset to the seed body with fresh food and start running upwards.
pub fn restart_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.snake = seed_body();
    game.direction = Direction::Up;
    game.score = 0;
    game.tick_count = 0;
    game.status = SnakeStatus::Running;
    respawn_food(game, rng);
    game.tick_timer = Timer::repeating(game.tick_period_ms());
    log::debug!("snake: restarted");
}

/// Advance the snake by `dt_ms` of wall-clock time.
///
/// Steps once per elapsed movement period. Returns true if the snake moved
/// or the game ended.
pub fn tick_snake<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.status != SnakeStatus::Running {
        return false;
    }

    game.tick_timer.advance(dt_ms);
    let mut changed = false;

    while game.tick_timer.poll() {
        step_snake(game, rng);
        changed = true;

        if game.status != SnakeStatus::Running {
            break;
        }
    }

    changed
}

/// Single movement step.
///
/// Collision is checked against the pre-move body, tail included: the head
/// may not enter the cell the tail is about to vacate.
pub fn step_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    if game.status != SnakeStatus::Running {
        return;
    }

    let next = game.head().offset(game.direction.delta());

    if !in_bounds(next, game.grid_size) || game.snake.contains(&next) {
        game_over(game);
        return;
    }

    game.tick_count += 1;
    game.snake.push_front(next);

    if game.food == Some(next) {
        game.score += 1;
        respawn_food(game, rng);
        // Speed changed: restart the movement timer at the new period.
        if game.status == SnakeStatus::Running {
            game.tick_timer = Timer::repeating(game.tick_period_ms());
        }
    } else {
        game.snake.pop_back();
    }
}

/// Move the food to a random cell not covered by the snake. A full board ends the game.
fn respawn_food<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    let snake = &game.snake;
    match random_free_cell(game.grid_size, |c| snake.contains(&c), rng) {
        Some(cell) => game.food = Some(cell),
        None => {
            game.food = None;
            log::debug!("snake: board full at score {}", game.score);
            game_over(game);
        }
    }
}

fn game_over(game: &mut SnakeGame) {
    game.status = SnakeStatus::Over;
    game.tick_timer.cancel();
    log::debug!(
        "snake: game over at score {} after {} steps",
        game.score,
        game.tick_count
    );
}

impl Lifecycle for SnakeGame {
    fn suspend(&mut self) {
        self.tick_timer.cancel();
    }

    fn resume(&mut self) {
        if self.is_running() && !self.tick_timer.is_armed() {
            self.tick_timer = Timer::repeating(self.tick_period_ms());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    /// A running game with the seed body, heading up.
    fn started_game() -> SnakeGame {
        let mut game = SnakeGame::new();
        steer(&mut game, Direction::Up);
        game
    }

    fn body(cells: &[(i16, i16)]) -> VecDeque<Cell> {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_direction_key_starts_idle_game() {
        let mut game = SnakeGame::new();
        assert_eq!(game.status, SnakeStatus::Idle);

        steer(&mut game, Direction::Left);

        assert_eq!(game.status, SnakeStatus::Running);
        assert_eq!(game.direction, Direction::Left);
        assert!(game.is_ticking());
    }

    #[test]
    fn test_idle_game_does_not_move() {
        let mut game = SnakeGame::new();
        let mut rng = seeded_rng();
        assert!(!tick_snake(&mut game, 10_000, &mut rng));
        assert_eq!(game.snake, body(&[(5, 5), (5, 6), (5, 7)]));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut game = started_game();
        assert!(!steer(&mut game, Direction::Down));
        assert_eq!(game.direction, Direction::Up);

        game.direction = Direction::Left;
        assert!(!steer(&mut game, Direction::Right));
        assert_eq!(game.direction, Direction::Left);
    }

    #[test]
    fn test_reversal_from_idle_still_starts() {
        let mut game = SnakeGame::new();
        steer(&mut game, Direction::Down);
        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.status, SnakeStatus::Running);
    }

    #[test]
    fn test_input_ignored_when_over() {
        let mut game = started_game();
        game.status = SnakeStatus::Over;
        steer(&mut game, Direction::Left);
        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.status, SnakeStatus::Over);
    }

    #[test]
    fn test_one_tick_without_food_shifts_body() {
        let mut game = started_game();
        let mut rng = seeded_rng();

        tick_snake(&mut game, 170, &mut rng);

        assert_eq!(game.snake, body(&[(5, 4), (5, 5), (5, 6)]));
        assert_eq!(game.score, 0);
        assert_eq!(game.status, SnakeStatus::Running);
    }

    #[test]
    fn test_partial_period_does_not_step() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        assert!(!tick_snake(&mut game, 169, &mut rng));
        assert!(tick_snake(&mut game, 1, &mut rng));
        assert_eq!(game.head(), Cell::new(5, 4));
    }

    #[test]
    fn test_eating_food_grows_and_respawns() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.food = Some(Cell::new(5, 4));

        step_snake(&mut game, &mut rng);

        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.back(), Some(&Cell::new(5, 7)));
        assert!(game.food.is_some_and(|f| !game.occupies(f)));
    }

    #[test]
    fn test_eating_restarts_timer_at_faster_period() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.food = Some(Cell::new(5, 4));

        // Leftover time past the eating step is discarded by the restart.
        tick_snake(&mut game, 170 + 100, &mut rng);
        assert_eq!(game.score, 1);
        assert_eq!(game.tick_timer.period_ms(), 162);
        assert_eq!(game.tick_timer.remaining_ms(), Some(162));
    }

    #[test]
    fn test_wall_collision_leaves_body_unchanged() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.snake = body(&[(0, 3), (1, 3), (2, 3)]);
        game.direction = Direction::Left;
        let before = game.snake.clone();

        step_snake(&mut game, &mut rng);

        assert_eq!(game.status, SnakeStatus::Over);
        assert_eq!(game.snake, before);
        assert!(!game.is_ticking());
    }

    #[test]
    fn test_wall_collision_bottom_and_right() {
        let mut rng = seeded_rng();

        let mut game = started_game();
        game.snake = body(&[(11, 2), (10, 2), (9, 2)]);
        game.direction = Direction::Right;
        step_snake(&mut game, &mut rng);
        assert_eq!(game.status, SnakeStatus::Over);

        let mut game = started_game();
        game.snake = body(&[(4, 11), (4, 10), (4, 9)]);
        game.direction = Direction::Down;
        step_snake(&mut game, &mut rng);
        assert_eq!(game.status, SnakeStatus::Over);
    }

    #[test]
    fn test_self_collision() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.snake = body(&[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6)]);
        game.direction = Direction::Right;
        game.food = Some(Cell::new(0, 0));

        step_snake(&mut game, &mut rng);

        assert_eq!(game.status, SnakeStatus::Over);
    }

    #[test]
    fn test_moving_into_current_tail_is_a_collision() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        // Tight loop: the head's next cell is the tail, which would vacate this step.
        game.snake = body(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        game.direction = Direction::Down;
        game.food = Some(Cell::new(0, 0));

        step_snake(&mut game, &mut rng);

        assert_eq!(game.status, SnakeStatus::Over);
        assert_eq!(game.head(), Cell::new(5, 5));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.score = 7;
        game.status = SnakeStatus::Over;
        game.direction = Direction::Left;
        game.snake = body(&[(1, 1), (2, 1), (3, 1), (4, 1)]);

        process_input(&mut game, SnakeInput::Start, &mut rng);

        assert_eq!(game.snake, body(&[(5, 5), (5, 6), (5, 7)]));
        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.status, SnakeStatus::Running);
        assert_eq!(game.score, 0);
        assert!(game.food.is_some_and(|f| !game.occupies(f)));
        assert_eq!(game.tick_timer.period_ms(), 170);
    }

    #[test]
    fn test_full_board_ends_game() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.grid_size = 2;
        game.snake = body(&[(0, 1), (1, 1), (1, 0)]);
        game.direction = Direction::Up;
        game.food = Some(Cell::new(0, 0));

        step_snake(&mut game, &mut rng);

        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.score, 1);
        assert_eq!(game.status, SnakeStatus::Over);
        assert_eq!(game.food, None);
        assert_eq!(game.cell_view(Cell::new(0, 0)), CellView::Head);
    }

    #[test]
    fn test_tick_stops_after_game_over() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        game.snake = body(&[(5, 0), (5, 1), (5, 2)]);

        // Many periods in one call: only the fatal step runs.
        assert!(tick_snake(&mut game, 170 * 5, &mut rng));
        assert_eq!(game.status, SnakeStatus::Over);
        assert_eq!(game.head(), Cell::new(5, 0));
        assert!(!tick_snake(&mut game, 170 * 5, &mut rng));
    }

    #[test]
    fn test_suspend_freezes_and_resume_rearms() {
        let mut game = started_game();
        let mut rng = seeded_rng();
        tick_snake(&mut game, 100, &mut rng);

        game.suspend();
        let before = game.snake.clone();
        assert!(!tick_snake(&mut game, 5_000, &mut rng));
        assert_eq!(game.snake, before);
        assert_eq!(game.status, SnakeStatus::Running);

        game.resume();
        // Resumed timer starts a full period from zero.
        assert!(!tick_snake(&mut game, 169, &mut rng));
        assert!(tick_snake(&mut game, 1, &mut rng));
    }

    #[test]
    fn test_resume_does_not_start_idle_game() {
        let mut game = SnakeGame::new();
        game.resume();
        assert!(!game.is_ticking());
        assert_eq!(game.status, SnakeStatus::Idle);
    }
}
