//! Environment tuning
//!
//! Every constant the simulation uses lives on [`ChaseConfig`]. Missing JSON
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::center_of;
use crate::consts::*;
use crate::sim::Arena;

/// Errors raised while loading a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub border_width: f32,

    // === Chaser ===
    pub chaser_size: f32,
    pub chaser_start_speed: f32,
    pub chaser_acceleration: f32,
    pub chaser_max_speed: f32,
    /// Floor for speed-decrease actions
    pub chaser_min_speed: f32,

    // === Target ===
    pub target_size: f32,
    pub target_start_speed: f32,
    pub target_speed_increment: f32,
    pub target_max_speed: f32,
    /// Steps between forced direction changes
    pub target_direction_interval: u64,
    pub bounce_inset: f32,
    pub bounce_jitter: f32,
    pub direction_jitter: f32,
    pub evasion_radius: f32,
    pub evasion_strength: f32,

    // === Spawning ===
    pub reset_margin_x: f32,
    pub reset_margin_y: f32,
    pub respawn_margin: f32,
    pub spawn_separation: f32,

    // === Rewards ===
    pub history_len: usize,
    pub catch_reward: f32,
    pub wall_penalty: f32,
    pub closing_reward: f32,
    pub drifting_penalty: f32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            border_width: BORDER_WIDTH,

            chaser_size: CHASER_SIZE,
            chaser_start_speed: CHASER_START_SPEED,
            chaser_acceleration: CHASER_ACCELERATION,
            chaser_max_speed: CHASER_MAX_SPEED,
            chaser_min_speed: CHASER_MIN_SPEED,

            target_size: TARGET_SIZE,
            target_start_speed: TARGET_START_SPEED,
            target_speed_increment: TARGET_SPEED_INCREMENT,
            target_max_speed: TARGET_MAX_SPEED,
            target_direction_interval: TARGET_DIRECTION_INTERVAL,
            bounce_inset: BOUNCE_INSET,
            bounce_jitter: BOUNCE_JITTER,
            direction_jitter: DIRECTION_JITTER,
            evasion_radius: EVASION_RADIUS,
            evasion_strength: EVASION_STRENGTH,

            reset_margin_x: RESET_MARGIN_X,
            reset_margin_y: RESET_MARGIN_Y,
            respawn_margin: RESPAWN_MARGIN,
            spawn_separation: SPAWN_SEPARATION,

            history_len: HISTORY_LEN,
            catch_reward: CATCH_REWARD,
            wall_penalty: WALL_PENALTY,
            closing_reward: CLOSING_REWARD,
            drifting_penalty: DRIFTING_PENALTY,
        }
    }
}

impl ChaseConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every entity and spawn region fits inside the arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg.into()))
        }

        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return invalid("arena dimensions must be positive");
        }
        if self.border_width < 0.0 {
            return invalid("border width must not be negative");
        }
        if self.chaser_size <= 0.0 || self.target_size <= 0.0 {
            return invalid("entity sizes must be positive");
        }

        let inner_w = self.arena_width - 2.0 * self.border_width;
        let inner_h = self.arena_height - 2.0 * self.border_width;
        let largest = self.chaser_size.max(self.target_size);
        // The wall check fires on the clamp edges, so the chaser needs room to sit between them
        if inner_w - largest <= 0.0 || inner_h - largest <= 0.0 {
            return invalid("arena too small for its entities");
        }

        let reset_w = inner_w - self.target_size - 2.0 * self.reset_margin_x;
        let reset_h = inner_h - self.target_size - 2.0 * self.reset_margin_y;
        if self.reset_margin_x < 0.0 || self.reset_margin_y < 0.0 || reset_w < 0.0 || reset_h < 0.0 {
            return invalid("reset spawn margins leave no room for the target");
        }
        let respawn = self.respawn_margin;
        if respawn < 0.0
            || inner_w - self.target_size - 2.0 * respawn < 0.0
            || inner_h - self.target_size - 2.0 * respawn < 0.0
        {
            return invalid("respawn margin leaves no room for the target");
        }

        // Sliding a too-close reset spawn to either edge of its region must clear the separation
        if self.spawn_separation < 0.0 {
            return invalid("spawn separation must not be negative");
        }
        let arena = Arena::from_config(self);
        let region = arena.spawn_region(
            self.target_size,
            Vec2::new(self.reset_margin_x, self.reset_margin_y),
        );
        let chaser_x = center_of(arena.center(), self.chaser_size).x;
        let near_x = center_of(region.min.as_vec2(), self.target_size).x;
        let far_x = center_of(region.max.as_vec2(), self.target_size).x;
        if chaser_x - near_x < self.spawn_separation || far_x - chaser_x < self.spawn_separation {
            return invalid(format!(
                "reset spawn region edges lie within {} of the chaser start",
                self.spawn_separation
            ));
        }

        if self.chaser_acceleration < 0.0 {
            return invalid("chaser acceleration must not be negative");
        }
        if !(self.chaser_min_speed <= self.chaser_start_speed
            && self.chaser_start_speed <= self.chaser_max_speed)
        {
            return invalid(format!(
                "chaser start speed {} outside [{}, {}]",
                self.chaser_start_speed, self.chaser_min_speed, self.chaser_max_speed
            ));
        }
        if self.target_start_speed < 0.0 || self.target_start_speed > self.target_max_speed {
            return invalid(format!(
                "target start speed {} outside [0, {}]",
                self.target_start_speed, self.target_max_speed
            ));
        }
        if self.target_direction_interval == 0 {
            return invalid("target direction interval must be non-zero");
        }
        if self.history_len == 0 {
            return invalid("history length must be at least 1");
        }

        Ok(())
    }
}
