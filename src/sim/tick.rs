//! Single-step simulation rules
//!
//! Order within a step is fixed: chaser action, clamp, target motion,
//! history append, reward, catch respawn. The wall check runs on the
//! already-clamped chaser, so landing on a clamp edge counts as a hit.

use glam::Vec2;

use super::env::ChaseEnv;
use super::rng::RandomSource;
use super::state::{Action, RewardEvent, StepOutcome};
use crate::center_of;

impl<R: RandomSource> ChaseEnv<R> {
    /// Advance one step with the given action
    pub fn step(&mut self, action: Action) -> StepOutcome {
        self.advance(Some(action))
    }

    /// Advance one step from a raw policy index; unknown indices move nothing
    /// but still let the target and counters advance.
    pub fn step_raw(&mut self, index: u8) -> StepOutcome {
        self.advance(Action::from_index(index))
    }

    fn advance(&mut self, action: Option<Action>) -> StepOutcome {
        if let Some(action) = action {
            self.chaser.apply(
                action,
                self.config.chaser_acceleration,
                self.config.chaser_min_speed,
                self.config.chaser_max_speed,
            );
        }
        self.chaser.pos = self.arena.clamp(self.chaser.pos, self.chaser.size);

        self.move_target();
        self.history.push(self.chaser.pos);

        let (event, reward) = self.judge();
        // Observed before the catch respawn so callers see where the catch happened
        let observation = self.observe();
        let done = event.is_terminal();
        if done {
            self.respawn_target();
        }

        StepOutcome {
            observation,
            reward,
            done,
            event,
        }
    }

    fn move_target(&mut self) {
        let target = &mut self.target;
        target.pos += target.vel;

        let jitter = self.config.bounce_jitter;
        let zone = self
            .arena
            .in_bounce_zone(target.pos, target.size, self.config.bounce_inset);
        if zone.x {
            target.vel.x = -target.vel.x + self.rng.uniform(-jitter, jitter);
        }
        if zone.y {
            target.vel.y = -target.vel.y + self.rng.uniform(-jitter, jitter);
        }
        target.pos = self.arena.clamp(target.pos, target.size);

        if self.stats.steps % self.config.target_direction_interval == 0 {
            target.change_direction(&mut self.rng, self.config.direction_jitter);
        }
        self.stats.steps += 1;

        let threat = self.chaser.center();
        if threat.distance(target.center()) < self.config.evasion_radius {
            target.evade(threat, self.config.evasion_strength);
        }
    }

    /// Apply the reward policy; first match wins
    fn judge(&mut self) -> (RewardEvent, f32) {
        let distance = self.distance();

        if distance <= self.chaser.size + self.target.size {
            self.stats.score += 1;
            self.stats.cumulative_reward += self.config.catch_reward;
            log::debug!(
                "Catch #{} at step {} (distance {:.1})",
                self.stats.score,
                self.stats.steps,
                distance
            );
            return (RewardEvent::Catch, self.config.catch_reward);
        }

        if self.arena.touches_wall(self.chaser.pos, self.chaser.size) {
            self.stats.cumulative_reward += self.config.wall_penalty;
            log::debug!(
                "Wall hit at ({}, {}), step {}",
                self.chaser.pos.x,
                self.chaser.pos.y,
                self.stats.steps
            );
            self.chaser.pos = self.arena.center();
            return (RewardEvent::WallHit, self.config.wall_penalty);
        }

        // Progress is measured against the oldest remembered position, not the last step
        if self.history.len() >= 2 {
            if let Some(oldest) = self.history.oldest() {
                let before = center_of(oldest, self.chaser.size).distance(self.target.center());
                return if distance < before {
                    (RewardEvent::Closing, self.config.closing_reward)
                } else {
                    (RewardEvent::Drifting, self.config.drifting_penalty)
                };
            }
        }

        (RewardEvent::Neutral, 0.0)
    }

    fn respawn_target(&mut self) {
        let margin = Vec2::splat(self.config.respawn_margin);
        let region = self.arena.spawn_region(self.target.size, margin);
        self.target.pos = region.sample(&mut self.rng);
        self.target.launch_diagonal(&mut self.rng);
        self.target.speed_up(
            self.config.target_speed_increment,
            self.config.target_max_speed,
        );
    }
}
