//! Chase Env - A 2D pursuit arena for reinforcement learning
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, evasion, reward shaping)
//! - `renderer`: Stateless draw-list and vertex generation from observations
//! - `input`: Keyboard-to-action mapping for interactive hosts
//! - `config`: Data-driven tuning loaded from JSON

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ChaseConfig, ConfigError};
pub use sim::{Action, ChaseEnv, Observation, RewardEvent, StepOutcome};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    pub const BORDER_WIDTH: f32 = 10.0;

    /// Chaser defaults
    pub const CHASER_SIZE: f32 = 20.0;
    pub const CHASER_START_SPEED: f32 = 8.0;
    pub const CHASER_ACCELERATION: f32 = 0.5;
    pub const CHASER_MAX_SPEED: f32 = 16.0;
    /// Deceleration never drops below this, regardless of start speed
    pub const CHASER_MIN_SPEED: f32 = 5.0;

    /// Target defaults
    pub const TARGET_SIZE: f32 = 30.0;
    pub const TARGET_START_SPEED: f32 = 4.0;
    /// Added to target speed on every catch
    pub const TARGET_SPEED_INCREMENT: f32 = 0.2;
    pub const TARGET_MAX_SPEED: f32 = 10.0;
    /// Steps between forced direction changes
    pub const TARGET_DIRECTION_INTERVAL: u64 = 150;
    /// Soft-bounce zone inside the hard clamp
    pub const BOUNCE_INSET: f32 = 10.0;
    pub const BOUNCE_JITTER: f32 = 0.5;
    pub const DIRECTION_JITTER: f32 = 1.0;
    /// Target starts steering away inside this radius
    pub const EVASION_RADIUS: f32 = 200.0;
    pub const EVASION_STRENGTH: f32 = 0.5;

    /// Spawn regions (inset from the border)
    pub const RESET_MARGIN_X: f32 = 300.0;
    pub const RESET_MARGIN_Y: f32 = 200.0;
    pub const RESPAWN_MARGIN: f32 = 100.0;
    /// Minimum center distance between chaser and target at reset
    pub const SPAWN_SEPARATION: f32 = 100.0;

    /// Chaser positions kept for reward shaping
    pub const HISTORY_LEN: usize = 5;

    /// Rewards
    pub const CATCH_REWARD: f32 = 10.0;
    pub const WALL_PENALTY: f32 = -5.0;
    pub const CLOSING_REWARD: f32 = 0.5;
    pub const DRIFTING_PENALTY: f32 = -0.2;

    /// Host loop rate
    pub const FRAME_RATE: u32 = 60;
}

/// Center of a square entity anchored at its top-left corner
#[inline]
pub fn center_of(anchor: Vec2, size: f32) -> Vec2 {
    anchor + Vec2::splat(size / 2.0)
}
