//! Host input mapping
//!
//! Interactive hosts translate held keys to one action per step. When nothing
//! is held the host falls back to a random action so the chaser keeps moving.

use serde::{Deserialize, Serialize};

use crate::sim::{Action, RandomSource};

/// Keys an interactive host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Shift,
}

impl Key {
    pub fn action(self) -> Action {
        match self {
            Key::Up => Action::MoveUp,
            Key::Down => Action::MoveDown,
            Key::Left => Action::MoveLeft,
            Key::Right => Action::MoveRight,
            Key::Space => Action::SpeedUp,
            Key::Shift => Action::SlowDown,
        }
    }
}

/// Highest-priority held key wins: Up, Down, Left, Right, Space, Shift
pub fn action_for_keys(held: &[Key]) -> Option<Action> {
    const PRIORITY: [Key; 6] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Space, Key::Shift];
    PRIORITY
        .iter()
        .find(|key| held.contains(key))
        .map(|key| key.action())
}

/// Uniform pick over all six actions
pub fn random_action(rng: &mut impl RandomSource) -> Action {
    let last = Action::ALL.len() as i32 - 1;
    let index = rng.int_inclusive(0, last).clamp(0, last) as usize;
    Action::ALL[index]
}

/// Held keys, or a random action when none are held
pub fn action_or_random(held: &[Key], rng: &mut impl RandomSource) -> Action {
    action_for_keys(held).unwrap_or_else(|| random_action(rng))
}
