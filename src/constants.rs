// Real-time frame budget for the terminal loop
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS

// Grid
pub const GRID_SIZE: i16 = 12;

// Snake speed: max(SNAKE_MIN_PERIOD_MS, SNAKE_BASE_PERIOD_MS - SNAKE_PERIOD_STEP_MS * score)
pub const SNAKE_BASE_PERIOD_MS: u64 = 170;
pub const SNAKE_PERIOD_STEP_MS: u64 = 8;
pub const SNAKE_MIN_PERIOD_MS: u64 = 80;
/// Food position before the first start. Every later placement is random.
pub const SNAKE_INITIAL_FOOD: (i16, i16) = (8, 4);

// Aim Trainer
pub const AIM_RELOCATE_INTERVAL_MS: u64 = 1200;
/// Target positions are sampled from [AIM_INSET_MIN_PCT, AIM_INSET_MAX_PCT) on both axes.
pub const AIM_INSET_MIN_PCT: f64 = 5.0;
pub const AIM_INSET_MAX_PCT: f64 = 85.0;
pub const AIM_DEFAULT_TOP_PCT: f64 = 40.0;
pub const AIM_DEFAULT_LEFT_PCT: f64 = 40.0;
/// Half-extent of the target marker, in percent of each panel axis.
pub const AIM_TARGET_RADIUS_PCT: f64 = 6.0;

// Memory Match
pub const MEMORY_MISMATCH_DELAY_MS: u64 = 650;
pub const MEMORY_COLUMNS: usize = 4;

// Quiz
pub const QUIZ_FEEDBACK_DELAY_MS: u64 = 600;

// Reaction Timer: go delay is uniform in [MIN, MAX)
pub const REACTION_MIN_DELAY_MS: u64 = 800;
pub const REACTION_MAX_DELAY_MS: u64 = 2000;
/// Sentinel elapsed time reported for a false start.
pub const REACTION_FALSE_START: i64 = -1;

// Files under ~/.playground/
pub const CONFIG_DIR_NAME: &str = ".playground";
pub const CONTENT_FILE_NAME: &str = "content.json";
pub const LOG_FILE_NAME: &str = "playground.log";
