// Screen (logical pixels)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 490.0;

// Timing
pub const PHYSICS_TICK_MS: u64 = 16;
pub const MAX_FRAME_MS: u64 = 100;
pub const DEFAULT_FRAME_MS: u64 = 16;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Bird
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 245.0;
pub const BIRD_SIZE: f64 = 50.0;
pub const BIRD_ANCHOR_X: f64 = -0.2;
pub const BIRD_ANCHOR_Y: f64 = 0.5;
pub const GRAVITY: f64 = 1000.0;
pub const JUMP_VELOCITY: f64 = -350.0;

// Bird rotation (degrees)
pub const JUMP_ANGLE: f64 = -20.0;
pub const JUMP_TWEEN_MS: u64 = 100;
pub const DIVE_ANGLE: f64 = 20.0;
pub const DIVE_STEP: f64 = 1.0;

// Obstacles
pub const SLOT_COUNT: usize = 8;
pub const SLOT_HEIGHT: f64 = 60.0;
pub const SLOT_MARGIN: f64 = 10.0;
pub const GAP_START_MIN: usize = 1;
pub const GAP_START_MAX: usize = 5;
pub const PIPE_SIZE: f64 = 50.0;
pub const PIPE_SPAWN_X: f64 = 400.0;
pub const PIPE_VELOCITY: f64 = -200.0;

// Score label
pub const SCORE_LABEL_X: f64 = 20.0;
pub const SCORE_LABEL_Y: f64 = 20.0;

// Asset keys
pub const BIRD_ASSET: &str = "bird";
pub const PIPE_ASSET: &str = "pipe";
pub const JUMP_SOUND: &str = "jump";

// Named states
pub const MAIN_STATE: &str = "main";
