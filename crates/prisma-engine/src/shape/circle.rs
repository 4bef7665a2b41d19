use std::f32::consts::TAU;

use crate::coords::Vec2;

use super::{Shape, Topology, Vertex};

/// Fewer than 3 segments cannot enclose any area.
const MIN_SEGMENTS: u32 = 3;

/// Circle primitive, approximated by a triangle fan around the center.
///
/// The fan is pre-unrolled into independent triangles (center + two
/// consecutive rim points each), so the vertex stream draws as a plain
/// triangle list. Vertex count is `segments * 3`.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    segments: u32,
    verts: Vec<Vertex>,
    revision: u64,
}

impl Circle {
    /// Origin-centered circle with r = 0.5 and a reasonable rim quality.
    pub fn new() -> Self {
        Self::at(Vec2::zero(), 0.5, 32)
    }

    pub fn with_radius(radius: f32) -> Self {
        Self::at(Vec2::zero(), radius, 32)
    }

    pub fn at(center: Vec2, radius: f32, segments: u32) -> Self {
        let mut c = Self {
            center,
            radius: sanitize_radius(radius),
            segments: sanitize_segments(segments),
            verts: Vec::new(),
            revision: 0,
        };
        c.regenerate();
        c
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Changes the radius and regenerates the vertex list.
    ///
    /// Non-positive radii are replaced by their absolute value.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = sanitize_radius(radius);
        self.regenerate();
    }

    /// Changes the rim quality and regenerates the vertex list.
    ///
    /// The vertex count changes with the segment count, so the GPU buffer
    /// may need to grow on the next sync.
    pub fn set_segments(&mut self, segments: u32) {
        self.segments = sanitize_segments(segments);
        self.regenerate();
    }

    /// Moves the center and regenerates the vertex list.
    pub fn set_position(&mut self, center: Vec2) {
        self.center = center;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.verts.clear();
        self.verts.reserve(self.segments as usize * 3);

        let step = TAU / self.segments as f32;
        for i in 0..self.segments {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;

            self.verts.push(Vertex::from(self.center));
            self.verts.push(self.rim_point(a0));
            self.verts.push(self.rim_point(a1));
        }
        self.revision += 1;
    }

    fn rim_point(&self, angle: f32) -> Vertex {
        Vertex::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}

fn sanitize_radius(radius: f32) -> f32 {
    if radius <= 0.0 {
        log::warn!("circle radius must be positive, got {radius}; using absolute value");
        radius.abs()
    } else {
        radius
    }
}

fn sanitize_segments(segments: u32) -> u32 {
    if segments < MIN_SEGMENTS {
        log::warn!("circle needs at least {MIN_SEGMENTS} segments, got {segments}; clamping");
        MIN_SEGMENTS
    } else {
        segments
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Circle {
    fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    fn topology(&self) -> Topology {
        Topology::TriangleList
    }

    fn vertex_count(&self) -> u32 {
        self.segments * 3
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_is_three_per_segment() {
        let c = Circle::at(Vec2::zero(), 0.5, 16);
        assert_eq!(c.vertex_count(), 48);
        assert_eq!(c.vertices().len(), 48);
    }

    #[test]
    fn every_triangle_is_anchored_at_the_center() {
        let center = Vec2::new(0.2, -0.3);
        let c = Circle::at(center, 0.4, 8);
        for tri in c.vertices().chunks(3) {
            assert_eq!(tri[0], Vertex::from(center));
        }
    }

    #[test]
    fn rim_points_sit_on_the_radius() {
        let c = Circle::at(Vec2::new(0.1, 0.1), 0.25, 12);
        for tri in c.vertices().chunks(3) {
            for v in &tri[1..] {
                let d = Vec2::new(v.pos[0], v.pos[1]).distance(c.center());
                assert!((d - 0.25).abs() < 1e-5, "rim point off radius: {d}");
            }
        }
    }

    #[test]
    fn segment_count_clamps_to_minimum() {
        let mut c = Circle::at(Vec2::zero(), 0.5, 1);
        assert_eq!(c.segments(), 3);
        c.set_segments(0);
        assert_eq!(c.segments(), 3);
    }

    #[test]
    fn negative_radius_uses_absolute_value() {
        let mut c = Circle::new();
        c.set_radius(-0.7);
        assert_eq!(c.radius(), 0.7);
    }

    #[test]
    fn growing_segments_grows_the_vertex_list() {
        let mut c = Circle::at(Vec2::zero(), 0.5, 8);
        let before = c.revision();
        c.set_segments(64);
        assert_eq!(c.vertices().len(), 192);
        assert!(c.revision() > before);
    }
}
