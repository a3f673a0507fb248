//! Reaction Timer logic: randomized go-delay, response timing, false starts.

use super::types::*;
use crate::constants::{REACTION_MAX_DELAY_MS, REACTION_MIN_DELAY_MS};
use crate::games::timer::Timer;
use crate::games::Lifecycle;
use rand::Rng;

/// UI-agnostic input actions for the Reaction Timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionInput {
    Start,
    /// Click on the reaction panel.
    Respond,
    Reset,
}

pub fn process_input<R: Rng>(game: &mut ReactionGame, input: ReactionInput, rng: &mut R) {
    match input {
        ReactionInput::Start => start_reaction(game, rng),
        ReactionInput::Respond => {
            respond(game);
        }
        ReactionInput::Reset => reset_reaction(game),
    }
}

/// Begin a trial: wait a random delay in [800, 2000) ms, then show the stimulus.
/// Restarting mid-trial discards the previous delay.
pub fn start_reaction<R: Rng>(game: &mut ReactionGame, rng: &mut R) {
    let delay = rng.gen_range(REACTION_MIN_DELAY_MS..REACTION_MAX_DELAY_MS);
    game.status = ReactionStatus::Waiting;
    game.outcome = None;
    game.go_at_ms = None;
    game.delay_timer = Timer::once(delay);
}

/// Player response. Returns true if it produced a result.
pub fn respond(game: &mut ReactionGame) -> bool {
    match game.status {
        ReactionStatus::Waiting => {
            game.delay_timer.cancel();
            game.status = ReactionStatus::Result;
            game.outcome = Some(ReactionOutcome::FalseStart);
            log::debug!("reaction: false start");
            true
        }
        ReactionStatus::Go => {
            let Some(go_at) = game.go_at_ms else {
                return false;
            };
            let elapsed = game.clock_ms.saturating_sub(go_at);
            game.status = ReactionStatus::Result;
            game.outcome = Some(ReactionOutcome::Time(elapsed));
            log::debug!("reaction: {} ms", elapsed);
            true
        }
        ReactionStatus::Idle | ReactionStatus::Result => false,
    }
}

/// Advance the engine clock. Returns true when the stimulus fired.
///
/// The stimulus timestamp is back-dated by however far the tick overshot the
/// delay, so the measurement does not depend on tick granularity.
pub fn tick_reaction(game: &mut ReactionGame, dt_ms: u64) -> bool {
    game.clock_ms = game.clock_ms.saturating_add(dt_ms);
    game.delay_timer.advance(dt_ms);
    if game.delay_timer.poll() {
        game.go_at_ms = Some(game.clock_ms.saturating_sub(game.delay_timer.overshoot_ms()));
        game.status = ReactionStatus::Go;
        return true;
    }
    false
}

/// Back to idle. Cancels any pending stimulus.
pub fn reset_reaction(game: &mut ReactionGame) {
    game.delay_timer.cancel();
    game.status = ReactionStatus::Idle;
    game.outcome = None;
    game.go_at_ms = None;
}

impl Lifecycle for ReactionGame {
    /// An unfinished trial cannot be timed fairly across a tab switch, so it
    /// is abandoned. Finished results are kept.
    fn suspend(&mut self) {
        if matches!(self.status, ReactionStatus::Waiting | ReactionStatus::Go) {
            reset_reaction(self);
        }
        self.delay_timer.cancel();
    }

    fn resume(&mut self) {}
}
