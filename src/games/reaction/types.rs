//! Reaction Timer data structures.

use crate::constants::REACTION_FALSE_START;
use crate::games::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionStatus {
    Idle,
    /// Armed; the stimulus fires after a random delay.
    Waiting,
    /// Stimulus shown; timing the response.
    Go,
    Result,
}

/// Outcome of a finished trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// Responded before the stimulus.
    FalseStart,
    /// Whole milliseconds between stimulus and response.
    Time(u64),
}

impl ReactionOutcome {
    /// Elapsed time with the false-start sentinel (`-1`).
    pub fn elapsed_ms(&self) -> i64 {
        match self {
            Self::FalseStart => REACTION_FALSE_START,
            Self::Time(ms) => i64::try_from(*ms).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReactionGame {
    pub status: ReactionStatus,
    pub outcome: Option<ReactionOutcome>,
    /// Engine clock, advanced only by ticks.
    pub(crate) clock_ms: u64,
    /// Clock reading when the stimulus fired.
    pub(crate) go_at_ms: Option<u64>,
    pub(crate) delay_timer: Timer,
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionGame {
    pub fn new() -> Self {
        Self {
            status: ReactionStatus::Idle,
            outcome: None,
            clock_ms: 0,
            go_at_ms: None,
            delay_timer: Timer::disarmed(),
        }
    }

    /// Recorded elapsed time: `None` before a result, `-1` for a false start.
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.outcome.map(|o| o.elapsed_ms())
    }

    /// Milliseconds left before the stimulus, while waiting.
    pub fn pending_delay_ms(&self) -> Option<u64> {
        self.delay_timer.remaining_ms()
    }

    /// Text for the reaction panel.
    pub fn phase_label(&self) -> String {
        match (self.status, self.outcome) {
            (ReactionStatus::Go, _) => "Click!".to_string(),
            (ReactionStatus::Waiting, _) => "Wait for green...".to_string(),
            (ReactionStatus::Result, Some(ReactionOutcome::FalseStart)) => {
                "False start".to_string()
            }
            (ReactionStatus::Result, Some(ReactionOutcome::Time(ms))) => {
                format!("Your time: {} ms", ms)
            }
            _ => "Press Start".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = ReactionGame::new();
        assert_eq!(game.status, ReactionStatus::Idle);
        assert_eq!(game.elapsed_ms(), None);
        assert_eq!(game.pending_delay_ms(), None);
        assert_eq!(game.phase_label(), "Press Start");
    }

    #[test]
    fn test_outcome_sentinel() {
        assert_eq!(ReactionOutcome::FalseStart.elapsed_ms(), -1);
        assert_eq!(ReactionOutcome::Time(0).elapsed_ms(), 0);
        assert_eq!(ReactionOutcome::Time(245).elapsed_ms(), 245);
    }

    #[test]
    fn test_phase_labels() {
        let mut game = ReactionGame::new();
        game.status = ReactionStatus::Waiting;
        assert_eq!(game.phase_label(), "Wait for green...");
        game.status = ReactionStatus::Go;
        assert_eq!(game.phase_label(), "Click!");
        game.status = ReactionStatus::Result;
        game.outcome = Some(ReactionOutcome::FalseStart);
        assert_eq!(game.phase_label(), "False start");
        game.outcome = Some(ReactionOutcome::Time(312));
        assert_eq!(game.phase_label(), "Your time: 312 ms");
    }
}
