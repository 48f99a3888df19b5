//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Stride of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Raw bytes for buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// RGBA colors for arena elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CHASER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const TARGET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const LABEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// 8-bit RGB to normalized opaque RGBA
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}
