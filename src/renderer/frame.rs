//! Stateless frame building
//!
//! A [`Frame`] is an ordered draw list built only from an [`Observation`],
//! the score and [`Visuals`]. Sinks replay the commands or upload
//! [`Frame::vertices`] directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::config::ChaseConfig;
use crate::sim::Observation;

/// Static look of the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visuals {
    pub chaser_size: f32,
    pub target_size: f32,
    pub border_width: f32,
    pub background: [f32; 4],
    pub chaser_color: [f32; 4],
    pub target_color: [f32; 4],
    pub border_color: [f32; 4],
    pub label_color: [f32; 4],
    pub label_pos: Vec2,
    pub label_size: f32,
}

impl Default for Visuals {
    fn default() -> Self {
        Self::from_config(&ChaseConfig::default())
    }
}

impl Visuals {
    /// Sizes follow the simulation tuning so drawn squares match hitboxes
    pub fn from_config(config: &ChaseConfig) -> Self {
        Self {
            chaser_size: config.chaser_size,
            target_size: config.target_size,
            border_width: config.border_width,
            background: colors::BACKGROUND,
            chaser_color: colors::CHASER,
            target_color: colors::TARGET,
            border_color: colors::BORDER,
            label_color: colors::LABEL,
            label_pos: Vec2::new(20.0, 20.0),
            label_size: 36.0,
        }
    }
}

/// One drawing operation, in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Stroke drawn inside the rectangle edge
    Outline {
        min: Vec2,
        size: Vec2,
        thickness: f32,
        color: [f32; 4],
    },
    Label {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Ordered draw list for one presented frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Triangle-list vertices for every filled shape (clear and labels excluded)
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::Rect { min, size, color } => {
                    vertices.extend(shapes::rect(*min, *size, *color));
                }
                DrawCommand::Outline {
                    min,
                    size,
                    thickness,
                    color,
                } => {
                    vertices.extend(shapes::outline(*min, *size, *thickness, *color));
                }
                DrawCommand::Clear { .. } | DrawCommand::Label { .. } => {}
            }
        }
        vertices
    }

    /// Vertices already mapped to clip space
    pub fn clip_space_vertices(&self) -> Vec<Vertex> {
        let mut vertices = self.vertices();
        shapes::to_clip_space(&mut vertices, self.width, self.height);
        vertices
    }

    pub fn clear_color(&self) -> Option<[f32; 4]> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Clear { color } => Some(*color),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the frame: background, chaser, target, border, score label
pub fn frame(obs: &Observation, score: u32, visuals: &Visuals) -> Frame {
    let arena = Vec2::new(obs.arena_width, obs.arena_height);
    let commands = vec![
        DrawCommand::Clear {
            color: visuals.background,
        },
        DrawCommand::Rect {
            min: obs.chaser_pos(),
            size: Vec2::splat(visuals.chaser_size),
            color: visuals.chaser_color,
        },
        DrawCommand::Rect {
            min: obs.target_pos(),
            size: Vec2::splat(visuals.target_size),
            color: visuals.target_color,
        },
        DrawCommand::Outline {
            min: Vec2::ZERO,
            size: arena,
            thickness: visuals.border_width,
            color: visuals.border_color,
        },
        DrawCommand::Label {
            pos: visuals.label_pos,
            text: format!("Score: {score}"),
            size: visuals.label_size,
            color: visuals.label_color,
        },
    ];

    Frame {
        width: obs.arena_width,
        height: obs.arena_height,
        commands,
    }
}
