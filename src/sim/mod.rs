//! Deterministic simulation module
//!
//! All pursuit logic lives here. This module must be pure and deterministic:
//! - Caller-driven steps only, no wall-clock time
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod arena;
pub mod env;
pub mod rng;
pub mod state;
pub mod tick;

pub use arena::{Arena, SpawnRegion};
pub use env::ChaseEnv;
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{
    Action, Chaser, EpisodeStats, Observation, PositionHistory, RewardEvent, StepOutcome, Target,
};
