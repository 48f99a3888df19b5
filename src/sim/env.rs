//! The chase environment
//!
//! One owned struct holds the whole simulation. Reset and observation live
//! here; the per-step rules live in `tick.rs`.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::rng::{RandomSource, seeded};
use super::state::{Chaser, EpisodeStats, Observation, PositionHistory, Target};
use crate::center_of;
use crate::config::{ChaseConfig, ConfigError};

/// Pursuit simulation over an injectable random source
#[derive(Debug, Clone)]
pub struct ChaseEnv<R: RandomSource = Pcg32> {
    pub(crate) config: ChaseConfig,
    pub(crate) arena: Arena,
    pub(crate) chaser: Chaser,
    pub(crate) target: Target,
    pub(crate) history: PositionHistory,
    pub(crate) stats: EpisodeStats,
    pub(crate) rng: R,
}

impl ChaseEnv<Pcg32> {
    /// Validate `config` and build a PCG-seeded environment, already reset
    pub fn new(config: ChaseConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seeded(seed))
    }

    /// Default tuning with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::build(ChaseConfig::default(), seeded(seed))
    }
}

impl<R: RandomSource> ChaseEnv<R> {
    /// Validate `config` and build an environment drawing from `rng`, already reset
    pub fn with_rng(config: ChaseConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: ChaseConfig, rng: R) -> Self {
        let arena = Arena::from_config(&config);
        let home = arena.center();
        let mut env = Self {
            arena,
            chaser: Chaser {
                pos: home,
                speed: config.chaser_start_speed,
                size: config.chaser_size,
            },
            target: Target {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                speed: config.target_start_speed,
                size: config.target_size,
            },
            history: PositionHistory::new(config.history_len),
            stats: EpisodeStats::default(),
            config,
            rng,
        };
        env.reset();
        env
    }

    /// Start a new episode.
    ///
    /// Re-centers the chaser, respawns the target in the reset region with a
    /// diagonal heading, and zeroes the counters and history. Chaser and
    /// target speeds carry over.
    pub fn reset(&mut self) -> Observation {
        let home = self.arena.center();
        self.chaser.pos = home;

        let margin = Vec2::new(self.config.reset_margin_x, self.config.reset_margin_y);
        let region = self.arena.spawn_region(self.target.size, margin);
        let mut pos = region.sample(&mut self.rng);

        // Too close to the chaser: slide to the near edge of the spawn region
        let chaser_center = self.chaser.center();
        let spawn_center = center_of(pos, self.target.size);
        if spawn_center.distance(chaser_center) < self.config.spawn_separation {
            pos.x = if spawn_center.x < chaser_center.x {
                region.min.x as f32
            } else {
                region.max.x as f32
            };
        }

        self.target.pos = pos;
        self.target.launch_diagonal(&mut self.rng);

        self.stats = EpisodeStats::default();
        self.history.reset_to(home);

        log::info!(
            "Reset: target at ({}, {}) heading ({}, {})",
            pos.x,
            pos.y,
            self.target.vel.x,
            self.target.vel.y
        );

        self.observe()
    }

    /// Snapshot of the current state
    pub fn observe(&self) -> Observation {
        Observation {
            target_x: self.target.pos.x,
            target_y: self.target.pos.y,
            chaser_x: self.chaser.pos.x,
            chaser_y: self.chaser.pos.y,
            distance: self.distance(),
            chaser_speed: self.chaser.speed,
            target_speed: self.target.speed,
            target_dx: self.target.vel.x,
            target_dy: self.target.vel.y,
            arena_width: self.arena.width,
            arena_height: self.arena.height,
        }
    }

    /// Center-to-center distance between chaser and target
    pub fn distance(&self) -> f32 {
        self.chaser.center().distance(self.target.center())
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn chaser(&self) -> &Chaser {
        &self.chaser
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Catches since the last reset
    pub fn score(&self) -> u32 {
        self.stats.score
    }
}
