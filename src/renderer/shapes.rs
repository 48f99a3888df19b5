//! Shape generation for 2D primitives
//!
//! All shapes are triangle lists in screen pixels (origin top-left, +y down).

use glam::Vec2;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle: two triangles
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Hollow rectangle whose stroke lies inside `min..min + size`
pub fn outline(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(size.x / 2.0).min(size.y / 2.0);
    if t <= 0.0 {
        return Vec::new();
    }
    let inner_h = size.y - 2.0 * t;

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full width
    vertices.extend(rect(min, Vec2::new(size.x, t), color));
    vertices.extend(rect(
        Vec2::new(min.x, min.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    ));
    // Sides fill the gap between them
    vertices.extend(rect(
        Vec2::new(min.x, min.y + t),
        Vec2::new(t, inner_h),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x + size.x - t, min.y + t),
        Vec2::new(t, inner_h),
        color,
    ));
    vertices
}

/// Map pixel coordinates to clip space (x right, y up, both in [-1, 1])
pub fn to_clip_space(vertices: &mut [Vertex], width: f32, height: f32) {
    for v in vertices {
        let [x, y] = v.position;
        v.position = [x / width * 2.0 - 1.0, 1.0 - y / height * 2.0];
    }
}
