use crate::coords::Vec2;

use super::{Shape, Topology, Vertex};

/// Default corners: isosceles triangle centered on the origin.
const DEFAULT_POINTS: [Vec2; 3] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.0, 0.5),
];

/// Triangle primitive: three corner points, one triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    points: [Vec2; 3],
    verts: Vec<Vertex>,
    revision: u64,
}

impl Triangle {
    pub fn new() -> Self {
        Self::with_points(DEFAULT_POINTS)
    }

    /// Builds a triangle from caller-supplied corner points.
    pub fn with_points(points: [Vec2; 3]) -> Self {
        let mut t = Self {
            points,
            verts: Vec::new(),
            revision: 0,
        };
        t.regenerate();
        t
    }

    pub fn points(&self) -> [Vec2; 3] {
        self.points
    }

    /// Replaces the corner points and regenerates the vertex list.
    pub fn set_points(&mut self, points: [Vec2; 3]) {
        self.points = points;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.verts.clear();
        self.verts.extend(self.points.iter().copied().map(Vertex::from));
        self.revision += 1;
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Triangle {
    fn vertices(&self) -> &[Vertex] {
        &self.verts
    }

    fn topology(&self) -> Topology {
        Topology::TriangleList
    }

    fn vertex_count(&self) -> u32 {
        3
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_centered_isosceles() {
        let t = Triangle::new();
        assert_eq!(
            t.vertices(),
            &[
                Vertex::new(-0.5, -0.5),
                Vertex::new(0.5, -0.5),
                Vertex::new(0.0, 0.5),
            ]
        );
        assert_eq!(t.vertex_count(), 3);
        assert_eq!(t.topology(), Topology::TriangleList);
    }

    #[test]
    fn custom_points_are_emitted_in_order() {
        let pts = [
            Vec2::new(-0.8, -0.2),
            Vec2::new(0.4, -0.8),
            Vec2::new(0.0, 0.4),
        ];
        let t = Triangle::with_points(pts);
        assert_eq!(t.vertices().len(), 3);
        assert_eq!(t.vertices()[1], Vertex::new(0.4, -0.8));
    }

    #[test]
    fn set_points_regenerates_and_bumps_revision() {
        let mut t = Triangle::new();
        let before = t.revision();
        t.set_points([Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
        assert!(t.revision() > before);
        assert_eq!(t.vertices()[0], Vertex::new(0.0, 0.0));
    }
}
