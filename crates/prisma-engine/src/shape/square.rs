use crate::coords::Vec2;

use super::{Shape, Topology, Vertex};

/// Axis-aligned square, defined by center + side length.
///
/// Emitted as two triangles (6 vertices): bottom-right half first, then
/// top-left half, sharing the bottom-left/top-right diagonal.
#[derive(Debug, Clone)]
pub struct Square {
    center: Vec2,
    side: f32,
    verts: Vec<Vertex>,
    revision: u64,
}

impl Square {
    /// Unit square centered on the origin.
    pub fn new() -> Self {
        Self::at(Vec2::zero(), 1.0)
    }

    /// Origin-centered square with a custom side length.
    pub fn with_side(side: f32) -> Self {
        Self::at(Vec2::zero(), side)
    }

    pub fn at(center: Vec2, side: f32) -> Self {
        let mut s = Self {
            center,
            side,
            verts: Vec::new(),
            revision: 0,
        };
        s.regenerate();
        s
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Changes the side length and regenerates the vertex list.
    pub fn set_side(&mut self, side: f32) {
        self.side = side;
        self.regenerate();
    }

    /// Moves the center and regenerates the vertex list.
    pub fn set_position(&mut self, center: Vec2) {
        self.center = center;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let half = self.side / 2.0;
        let left = self.center.x - half;
        let right = self.center.x + half;
        let bottom = self.center.y - half;
        let top = self.center.y + half;

        self.verts.clear();
        self.verts.extend_from_slice(&[
            Vertex::new(left, bottom),
            Vertex::new(right, bottom),
            Vertex::new(right, top),
            Vertex::new(left, bottom),
            Vertex::new(right, top),
            Vertex::new(left, top),
        ]);
        self.revision += 1;
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Square {
    fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    fn topology(&self) -> Topology {
        Topology::TriangleList
    }

    fn vertex_count(&self) -> u32 {
        6
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spans_half_ndc() {
        let s = Square::new();
        assert_eq!(s.vertices().len(), 6);
        // Corners of the unit square sit at ±0.5.
        assert_eq!(s.vertices()[0], Vertex::new(-0.5, -0.5));
        assert_eq!(s.vertices()[2], Vertex::new(0.5, 0.5));
    }

    #[test]
    fn diagonal_vertices_are_shared() {
        let s = Square::at(Vec2::new(0.2, -0.1), 0.4);
        let v = s.vertices();
        // Both triangles reuse bottom-left and top-right.
        assert_eq!(v[0], v[3]);
        assert_eq!(v[2], v[4]);
    }

    #[test]
    fn set_side_rescales_around_center() {
        let mut s = Square::at(Vec2::new(1.0, 1.0), 1.0);
        let before = s.revision();
        s.set_side(2.0);
        assert!(s.revision() > before);
        assert_eq!(s.vertices()[0], Vertex::new(0.0, 0.0));
        assert_eq!(s.vertices()[2], Vertex::new(2.0, 2.0));
    }

    #[test]
    fn set_position_translates_all_corners() {
        let mut s = Square::new();
        s.set_position(Vec2::new(0.5, 0.5));
        assert_eq!(s.vertices()[0], Vertex::new(0.0, 0.0));
        assert_eq!(s.vertices()[5], Vertex::new(0.0, 1.0));
    }
}
