use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Single 2D vertex position in NDC.
///
/// Matches the vertex buffer layout expected by the generated vertex
/// shader (`@location(0) pos: vec2<f32>`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }
}

impl From<Vec2> for Vertex {
    #[inline]
    fn from(p: Vec2) -> Self {
        Self { pos: [p.x, p.y] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_tightly_packed() {
        // The GPU vertex layout assumes 8-byte stride.
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
    }
}
