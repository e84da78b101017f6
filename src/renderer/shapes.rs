//! Shape generation for 2D primitives
//!
//! All coordinates are canvas pixels, origin top-left, y down.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for one corridor wall, one quad per non-empty slot
///
/// `thickness(i)` is the wall depth at slot `i`; `from_top` hangs the wall
/// from the top edge, otherwise it rises from `canvas_height`.
pub fn wall(
    thickness: impl Iterator<Item = f32>,
    segment_width: f32,
    canvas_height: f32,
    from_top: bool,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (i, depth) in thickness.enumerate() {
        if depth <= 0.0 {
            continue;
        }
        let x = i as f32 * segment_width;
        let y = if from_top { 0.0 } else { canvas_height - depth };
        vertices.extend(rect(Vec2::new(x, y), Vec2::new(segment_width, depth), color));
    }
    vertices
}
