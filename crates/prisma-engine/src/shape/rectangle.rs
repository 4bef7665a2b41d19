use crate::coords::Vec2;

use super::{Shape, Topology, Vertex};

/// Axis-aligned rectangle, defined by center + width/height.
///
/// Same two-triangle layout as [`super::Square`]; the default proportions
/// are 1.0 × 0.6.
#[derive(Debug, Clone)]
pub struct Rectangle {
    center: Vec2,
    width: f32,
    height: f32,
    verts: Vec<Vertex>,
    revision: u64,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::at(Vec2::zero(), 1.0, 0.6)
    }

    /// Origin-centered rectangle with custom dimensions.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self::at(Vec2::zero(), width, height)
    }

    pub fn at(center: Vec2, width: f32, height: f32) -> Self {
        let mut r = Self {
            center,
            width,
            height,
            verts: Vec::new(),
            revision: 0,
        };
        r.regenerate();
        r
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Changes both dimensions and regenerates the vertex list.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.regenerate();
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.regenerate();
    }

    /// Moves the center and regenerates the vertex list.
    pub fn set_position(&mut self, center: Vec2) {
        self.center = center;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let left = self.center.x - hw;
        let right = self.center.x + hw;
        let bottom = self.center.y - hh;
        let top = self.center.y + hh;

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

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Rectangle {
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
    fn default_proportions() {
        let r = Rectangle::new();
        assert_eq!(r.width(), 1.0);
        assert_eq!(r.height(), 0.6);
        assert_eq!(r.vertices().len(), 6);
        assert_eq!(r.vertices()[0], Vertex::new(-0.5, -0.3));
    }

    #[test]
    fn set_width_keeps_height() {
        let mut r = Rectangle::with_size(1.0, 0.4);
        r.set_width(2.0);
        assert_eq!(r.vertices()[1], Vertex::new(1.0, -0.2));
        assert_eq!(r.height(), 0.4);
    }

    #[test]
    fn set_size_bumps_revision_once() {
        let mut r = Rectangle::new();
        let before = r.revision();
        r.set_size(0.2, 0.2);
        assert_eq!(r.revision(), before + 1);
    }

    #[test]
    fn offset_center_shifts_corners() {
        let r = Rectangle::at(Vec2::new(0.5, -0.5), 0.2, 0.2);
        assert_eq!(r.vertices()[0], Vertex::new(0.4, -0.6));
        assert_eq!(r.vertices()[2], Vertex::new(0.6, -0.4));
    }
}
