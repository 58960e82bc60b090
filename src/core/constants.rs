// Frame and physics timing
pub const PHYSICS_TICK_MS: u64 = 16;
pub const PHYSICS_DT: f64 = PHYSICS_TICK_MS as f64 / 1000.0;
pub const INPUT_POLL_MS: u64 = 8;
pub const MAX_FRAME_CATCHUP_MS: u64 = 250;

// Catalog sizes
pub const MAX_BIRD_TYPES: usize = 8;
pub const MAX_BACKGROUND_TYPES: usize = 8;
pub const MAX_OBSTACLE_TYPES: usize = 6;
pub const BIRD_VARIATIONS: usize = 4;

// Shop costs
pub const BIRD_UNLOCK_COST: u32 = 50;
pub const BACKGROUND_UNLOCK_COST: u32 = 50;
pub const OBSTACLE_UNLOCK_COST: u32 = 50;
pub const SKILL_UNLOCK_COST: u32 = 100;
pub const MAX_SKILL_LEVEL: u8 = 3;

// Probabilities (percent)
pub const BIRD_SPAWN_CHANCE: u32 = 40;
pub const BIRD_MOVE_RIGHT_CHANCE: u32 = 70;
pub const BIRD_CHAT_CHANCE: u32 = 30;
pub const SKILL1_LEVEL1_COIN_CHANCE: u32 = 50;
pub const SKILL1_LEVEL2_COIN_CHANCE: u32 = 70;
pub const PING_PONG_UP_CHANCE: u32 = 50;

// Spawn delays (seconds)
pub const EASY_OBSTACLE_SPAWN_DELAY: f64 = 1.5;
pub const MEDIUM_OBSTACLE_SPAWN_DELAY: f64 = 1.25;
pub const HARD_OBSTACLE_SPAWN_DELAY: f64 = 1.0;
pub const BIRD_SPAWN_INTERVAL: f64 = 5.0;

// Score gain per tick by difficulty
pub const SCORE_GAIN_INTERVAL: f64 = 1.0;
pub const EASY_SCORE_INCREMENT: u32 = 2;
pub const MEDIUM_SCORE_INCREMENT: u32 = 3;
pub const HARD_SCORE_INCREMENT: u32 = 4;

// Movement speeds by difficulty (world units per second, negative = leftwards)
pub const EASY_BIRD_SPEED: f64 = -5.0;
pub const MEDIUM_BIRD_SPEED: f64 = -6.0;
pub const HARD_BIRD_SPEED: f64 = -7.0;
pub const EASY_OBSTACLE_SPEED: f64 = -3.0;
pub const MEDIUM_OBSTACLE_SPEED: f64 = -4.0;
pub const HARD_OBSTACLE_SPEED: f64 = -5.0;
pub const EASY_COIN_SPEED: f64 = -3.0;
pub const MEDIUM_COIN_SPEED: f64 = -4.0;
pub const HARD_COIN_SPEED: f64 = -5.0;
pub const EASY_PING_PONG_SPEED: f64 = 0.3;
pub const MEDIUM_PING_PONG_SPEED: f64 = 0.45;
pub const HARD_PING_PONG_SPEED: f64 = 0.6;
pub const BIRD_DRIFT_SPEED: f64 = -1.0;

// Day/night cycle
pub const DAY_NIGHT_CYCLE_INTERVAL: f64 = 0.2;
pub const DAY_NIGHT_START_HOUR: u32 = 12;

// HUD
pub const FPS_HUD_INTERVAL: f64 = 1.0;
pub const DEATH_MENU_DELAY: f64 = 0.5;

// Player
pub const GRAVITY: f64 = 12.0;
pub const FLAP_IMPULSE: f64 = 4.5;
pub const PLAYER_X: f64 = -1.5;
pub const PLAYER_RADIUS: f64 = 0.25;
pub const INVULNERABILITY_SECONDS: f64 = 2.0;
pub const SKILL2_BASE_COOLDOWN: f64 = 9.0;
pub const SKILL2_LEVEL2_COOLDOWN: f64 = 8.0;
pub const SKILL2_LEVEL3_COOLDOWN: f64 = 7.0;

// World geometry (world units, origin at screen center, +y up)
pub const WORLD_HALF_WIDTH: f64 = 5.0;
pub const WORLD_HALF_HEIGHT: f64 = 3.0;
pub const RECYCLE_LEFT_X: f64 = -7.5;
pub const RECYCLE_RIGHT_X: f64 = 9.5;
pub const PING_PONG_BOUND: f64 = 1.5;
pub const OBSTACLE_GAP_HALF: f64 = 1.1;
pub const OBSTACLE_HALF_WIDTH: f64 = 0.45;
pub const COIN_RADIUS: f64 = 0.25;

// Spawn positions
pub const OBSTACLE_SPAWN_X: f64 = 6.0;
pub const OBSTACLE_SPAWN_Y_RANGE: f64 = 1.0;
pub const COIN_SPAWN_X: f64 = 8.0;
pub const COIN_SPAWN_Y_RANGE: f64 = 2.0;
pub const BIRD_SPAWN_X: f64 = 6.0;
pub const BIRD_SPAWN_Y_RANGE: f64 = 1.5;

// Pool capacities
pub const OBSTACLE_POOL_SIZE: usize = 6;
pub const COIN_POOL_SIZE: usize = 6;
pub const BIRD_POOL_SIZE: usize = 4;

// Scene loading
pub const LOAD_ACTIVATION_THRESHOLD: f32 = 0.9;
pub const LOAD_BRIEF_DELAY: f64 = 0.2;

// Persisted defaults
pub const DEFAULT_HIGH_SCORE: u32 = 100;
pub const DEFAULT_VOLUME: f32 = 1.0;
pub const DEFAULT_FLAP_KEY: &str = "Space";

// Save files
pub const PREFS_FILE: &str = "prefs.json";
pub const LOG_FILE: &str = "flappy-skies.log";
