// Board
pub const GRID_ROWS: i16 = 40;
pub const GRID_COLS: i16 = 40;

// Session start column; the start row is the vertical midpoint of the board
pub const START_COL: i16 = 1;

// Scoring
pub const POINTS_PER_FOOD: u32 = 10;

// Food placement
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

// Persistence
pub const DATA_DIR_NAME: &str = ".gridsnake";
pub const HIGH_SCORES_FILE: &str = "high_scores.json";
pub const LOG_FILE: &str = "gridsnake.log";
pub const DATA_DIR_ENV: &str = "GRIDSNAKE_DATA_DIR";

// Event loop: upper bound on a single input poll while idle
pub const INPUT_POLL_MS: u64 = 50;
