//! Simulation entities and value types
//!
//! Everything here is plain owned data. The only mutation happens through
//! [`super::ChaseEnv`].

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::center_of;

/// Discrete chaser action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SpeedUp,
    SlowDown,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 6] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::SpeedUp,
        Action::SlowDown,
    ];

    /// Decode a policy output; unknown indices are `None`
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveUp => "up",
            Action::MoveDown => "down",
            Action::MoveLeft => "left",
            Action::MoveRight => "right",
            Action::SpeedUp => "speed+",
            Action::SlowDown => "speed-",
        }
    }

    /// Unit step for directional actions (screen coordinates, +y down)
    pub fn direction(self) -> Option<Vec2> {
        match self {
            Action::MoveUp => Some(Vec2::NEG_Y),
            Action::MoveDown => Some(Vec2::Y),
            Action::MoveLeft => Some(Vec2::NEG_X),
            Action::MoveRight => Some(Vec2::X),
            Action::SpeedUp | Action::SlowDown => None,
        }
    }
}

/// The agent-controlled square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chaser {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

impl Chaser {
    #[inline]
    pub fn center(&self) -> Vec2 {
        center_of(self.pos, self.size)
    }

    /// Move one speed-length along a single axis, or adjust speed.
    /// Does not clamp.
    pub fn apply(&mut self, action: Action, acceleration: f32, min_speed: f32, max_speed: f32) {
        match action {
            Action::SpeedUp => self.speed = (self.speed + acceleration).min(max_speed),
            Action::SlowDown => self.speed = (self.speed - acceleration).max(min_speed),
            _ => {
                if let Some(dir) = action.direction() {
                    self.pos += dir * self.speed;
                }
            }
        }
    }
}

/// The evasive square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Nominal speed; steering renormalizes velocity to this
    pub speed: f32,
    pub size: f32,
}

impl Target {
    #[inline]
    pub fn center(&self) -> Vec2 {
        center_of(self.pos, self.size)
    }

    /// Diagonal launch: each axis gets `±speed`
    pub fn launch_diagonal(&mut self, rng: &mut impl RandomSource) {
        let dx = rng.sign() * self.speed;
        let dy = rng.sign() * self.speed;
        self.vel = Vec2::new(dx, dy);
    }

    /// Pick a fresh heading: `±speed + jitter` per axis, then rescale to `speed`
    pub fn change_direction(&mut self, rng: &mut impl RandomSource, jitter: f32) {
        let dx = rng.sign() * self.speed + rng.uniform(-jitter, jitter);
        let dy = rng.sign() * self.speed + rng.uniform(-jitter, jitter);
        self.vel = Vec2::new(dx, dy);
        self.renormalize();
    }

    /// Rescale velocity to exactly `speed`; zero velocity is left alone
    pub fn renormalize(&mut self) {
        let magnitude = self.vel.length();
        if magnitude > 0.0 {
            self.vel = self.vel / magnitude * self.speed;
        }
    }

    /// Push velocity away from `threat`, keeping the nominal speed
    pub fn evade(&mut self, threat: Vec2, strength: f32) {
        let toward = threat - self.center();
        let distance = toward.length();
        if distance > 0.0 {
            self.vel -= toward / distance * strength;
            self.renormalize();
        }
    }

    /// Ratchet speed up after a catch
    pub fn speed_up(&mut self, increment: f32, max_speed: f32) {
        self.speed = (self.speed + increment).min(max_speed);
    }
}

/// Bounded FIFO of recent chaser anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionHistory {
    entries: VecDeque<Vec2>,
    capacity: usize,
}

impl PositionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity: capacity.max(1),
        }
    }

    /// Clear and seed with a single position
    pub fn reset_to(&mut self, pos: Vec2) {
        self.entries.clear();
        self.entries.push_back(pos);
    }

    /// Append, evicting the oldest entry when full
    pub fn push(&mut self, pos: Vec2) {
        self.entries.push_back(pos);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn oldest(&self) -> Option<Vec2> {
        self.entries.front().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.entries.iter()
    }
}

/// Running totals since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Sum of catch bonuses and wall penalties (shaping excluded)
    pub cumulative_reward: f32,
    /// Catches
    pub score: u32,
    pub steps: u64,
}

/// What the reward policy matched on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardEvent {
    /// Chaser touched the target
    Catch,
    /// Chaser hit a border and was sent home
    WallHit,
    /// Closer than the oldest remembered position
    Closing,
    /// Not closer than the oldest remembered position
    Drifting,
    /// Not enough history to judge progress
    Neutral,
}

impl RewardEvent {
    pub fn is_terminal(self) -> bool {
        self == RewardEvent::Catch
    }
}

/// Flat snapshot handed to learners and renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub target_x: f32,
    pub target_y: f32,
    pub chaser_x: f32,
    pub chaser_y: f32,
    /// Center-to-center distance
    pub distance: f32,
    pub chaser_speed: f32,
    pub target_speed: f32,
    pub target_dx: f32,
    pub target_dy: f32,
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Observation {
    /// Number of features in [`Observation::to_array`]
    pub const LEN: usize = 11;

    /// Feature vector in field declaration order
    pub fn to_array(&self) -> [f32; Self::LEN] {
        [
            self.target_x,
            self.target_y,
            self.chaser_x,
            self.chaser_y,
            self.distance,
            self.chaser_speed,
            self.target_speed,
            self.target_dx,
            self.target_dy,
            self.arena_width,
            self.arena_height,
        ]
    }

    pub fn chaser_pos(&self) -> Vec2 {
        Vec2::new(self.chaser_x, self.chaser_y)
    }

    pub fn target_pos(&self) -> Vec2 {
        Vec2::new(self.target_x, self.target_y)
    }
}

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f32,
    /// Set on catch; the environment keeps running either way
    pub done: bool,
    pub event: RewardEvent,
}
