//! Pixel Dash - A side-scrolling desert runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `atlas`: Sprite dimension source (the core never touches image data)
//! - `store`: High score persistence seam

pub mod atlas;
pub mod sim;
pub mod store;

pub use atlas::{PixelAtlas, SpriteAtlas, SpriteId};
pub use sim::{DrawFrame, GamePhase, GameSession, InputEvent};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Logical board width
    pub const BOARD_WIDTH: f32 = 750.0;
    /// Logical board height
    pub const BOARD_HEIGHT: f32 = 250.0;
    /// Y position of the track the runner stands on
    pub const GROUND_Y: f32 = BOARD_HEIGHT - 40.0;

    /// Fast tick rate driving the simulation
    pub const TICK_HZ: u32 = 60;
    /// Milliseconds per fast tick
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// Runner defaults
    pub const ACTOR_X: f32 = 50.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Upward velocity applied on jump (negative = up, screen coordinates)
    pub const JUMP_IMPULSE: f32 = -17.0;
    /// Run/duck animation frame delay
    pub const RUN_FRAME_DELAY_MS: u64 = 100;

    /// Scroll speed at the start of a run
    pub const BASE_SCROLL_SPEED: f32 = 8.0;
    /// Speed gained every [`SPEED_STEP_SCORE`] points
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Score interval between difficulty bumps
    pub const SPEED_STEP_SCORE: u32 = 100;

    /// Obstacle spawn cadence (shrinks with difficulty)
    pub const SPAWN_INTERVAL_MS: u64 = 1500;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 50;
    pub const SPAWN_INTERVAL_MIN_MS: u64 = 700;
    /// Obstacles enter this far beyond the right edge
    pub const SPAWN_LEAD_X: f32 = 50.0;

    /// Flying hazards are always this much faster than the ground scroll
    pub const FLYING_SPEED_BONUS: f32 = 2.0;
    /// Flying hazard wing-flap frame delay
    pub const FLYING_FRAME_DELAY_MS: u64 = 150;
    /// Flying hazards spawn up to this far above the ground resting line
    pub const FLYING_Y_BAND: f32 = 40.0;

    /// Clouds drift at scroll speed divided by this (parallax)
    pub const CLOUD_PARALLAX_DIVISOR: f32 = 4.0;
    /// One-in-N chance per playing tick to spawn an extra cloud
    pub const CLOUD_SPAWN_ODDS: u32 = 200;
    pub const CLOUD_MIN_Y: f32 = 20.0;
    pub const CLOUD_Y_BAND: f32 = 80.0;
    pub const CLOUD_X_BAND: f32 = 200.0;

    /// Key under which the high score is persisted
    pub const HIGH_SCORE_KEY: &str = "highscore";
}
