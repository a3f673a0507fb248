//! Aim Trainer data structures.

use crate::constants::{
    AIM_DEFAULT_LEFT_PCT, AIM_DEFAULT_TOP_PCT, AIM_INSET_MAX_PCT, AIM_INSET_MIN_PCT,
    AIM_TARGET_RADIUS_PCT,
};
use crate::games::timer::Timer;
use rand::Rng;

/// Target centre as percentage offsets from the panel's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPosition {
    pub top: f64,
    pub left: f64,
}

impl Default for TargetPosition {
    fn default() -> Self {
        Self::centered()
    }
}

impl TargetPosition {
    /// Resting position used on construction and reset.
    pub fn centered() -> Self {
        Self {
            top: AIM_DEFAULT_TOP_PCT,
            left: AIM_DEFAULT_LEFT_PCT,
        }
    }

    /// Uniform position inside the safe inset on both axes.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            top: rng.gen_range(AIM_INSET_MIN_PCT..AIM_INSET_MAX_PCT),
            left: rng.gen_range(AIM_INSET_MIN_PCT..AIM_INSET_MAX_PCT),
        }
    }

    /// Whether a pointer at (`top`, `left`) percent lands on the marker.
    pub fn contains(&self, top: f64, left: f64) -> bool {
        (top - self.top).abs() <= AIM_TARGET_RADIUS_PCT
            && (left - self.left).abs() <= AIM_TARGET_RADIUS_PCT
    }
}

#[derive(Debug, Clone)]
pub struct AimGame {
    pub running: bool,
    pub hits: u32,
    pub misses: u32,
    pub target: TargetPosition,
    pub(crate) relocate_timer: Timer,
}

impl Default for AimGame {
    fn default() -> Self {
        Self::new()
    }
}

impl AimGame {
    /// Paused, zeroed, target centred.
    pub fn new() -> Self {
        Self {
            running: false,
            hits: 0,
            misses: 0,
            target: TargetPosition::centered(),
            relocate_timer: Timer::disarmed(),
        }
    }

    /// Label for the start/pause button.
    pub fn toggle_label(&self) -> &'static str {
        if self.running {
            "Pause"
        } else {
            "Start"
        }
    }

    pub fn is_relocating(&self) -> bool {
        self.relocate_timer.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let game = AimGame::new();
        assert!(!game.running);
        assert_eq!(game.hits, 0);
        assert_eq!(game.misses, 0);
        assert_eq!(game.target, TargetPosition { top: 40.0, left: 40.0 });
        assert!(!game.is_relocating());
        assert_eq!(game.toggle_label(), "Start");
    }

    #[test]
    fn test_random_target_stays_inside_inset() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let t = TargetPosition::random(&mut rng);
            assert!((5.0..85.0).contains(&t.top));
            assert!((5.0..85.0).contains(&t.left));
        }
    }

    #[test]
    fn test_contains_uses_marker_radius() {
        let t = TargetPosition { top: 50.0, left: 20.0 };
        assert!(t.contains(50.0, 20.0));
        assert!(t.contains(55.0, 15.0));
        assert!(!t.contains(57.0, 20.0));
        assert!(!t.contains(50.0, 27.0));
    }
}
