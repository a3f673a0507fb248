//! Aim Trainer logic: relocation timer, hit/miss counting.

use super::types::*;
use crate::constants::AIM_RELOCATE_INTERVAL_MS;
use crate::games::timer::Timer;
use crate::games::Lifecycle;
use rand::Rng;

/// UI-agnostic input actions for the Aim Trainer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimInput {
    /// Pointer press at a panel position, in percent of each axis.
    ClickAt { top: f64, left: f64 },
    ClickTarget,
    ClickBackground,
    /// Start / Pause button.
    ToggleRunning,
    Reset,
}

pub fn process_input<R: Rng>(game: &mut AimGame, input: AimInput, rng: &mut R) {
    match input {
        AimInput::ClickAt { top, left } => {
            let hit = game.target.contains(top, left);
            click(game, hit, rng);
        }
        AimInput::ClickTarget => click(game, true, rng),
        AimInput::ClickBackground => click(game, false, rng),
        AimInput::ToggleRunning => toggle_running(game),
        AimInput::Reset => reset_aim(game),
    }
}

/// Register a click. A hit scores, forgives one pending miss and moves the
/// target; anything else is a miss. Ignored while paused.
pub fn click<R: Rng>(game: &mut AimGame, hit: bool, rng: &mut R) {
    if !game.running {
        return;
    }
    if hit {
        game.hits += 1;
        game.misses = game.misses.saturating_sub(1);
        game.target = TargetPosition::random(rng);
    } else {
        game.misses += 1;
    }
}

/// Flip between running and paused. Pausing cancels the relocation timer;
/// resuming schedules it afresh.
pub fn toggle_running(game: &mut AimGame) {
    game.running = !game.running;
    if game.running {
        game.relocate_timer = Timer::repeating(AIM_RELOCATE_INTERVAL_MS);
    } else {
        game.relocate_timer.cancel();
    }
    log::debug!("aim: running={}", game.running);
}

/// Zero the counters, re-centre the target and start running.
pub fn reset_aim(game: &mut AimGame) {
    game.hits = 0;
    game.misses = 0;
    game.target = TargetPosition::centered();
    game.running = true;
    game.relocate_timer = Timer::repeating(AIM_RELOCATE_INTERVAL_MS);
}

/// Advance by `dt_ms`. Each elapsed relocation window moves the target and
/// counts a miss. Returns true if anything changed.
pub fn tick_aim<R: Rng>(game: &mut AimGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.running {
        return false;
    }

    game.relocate_timer.advance(dt_ms);
    let mut changed = false;
    while game.relocate_timer.poll() {
        game.target = TargetPosition::random(rng);
        game.misses += 1;
        changed = true;
    }
    changed
}

impl Lifecycle for AimGame {
    fn suspend(&mut self) {
        self.relocate_timer.cancel();
    }

    fn resume(&mut self) {
        if self.running && !self.relocate_timer.is_armed() {
            self.relocate_timer = Timer::repeating(AIM_RELOCATE_INTERVAL_MS);
        }
    }
}
