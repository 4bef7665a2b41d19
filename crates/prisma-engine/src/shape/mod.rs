//! CPU-side shape generators.
//!
//! Responsibilities:
//! - define the capability set shared by all primitives (vertex positions,
//!   draw topology, vertex count)
//! - keep each closed-form generator isolated per shape file
//!
//! Shapes are renderer-agnostic: no GPU types appear here. Every mutation
//! regenerates the full vertex list and bumps [`Shape::revision`]; the GPU
//! side (`render::ShapeRenderer`) watches the revision to decide when a
//! buffer re-upload is due.

mod circle;
mod rectangle;
mod square;
mod triangle;
mod vertex;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;
pub use vertex::Vertex;

/// Draw primitive mode for a shape's vertex stream.
///
/// Only independent triangles are needed today; the circle's fan is
/// pre-unrolled by its generator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Every 3 consecutive vertices form an independent triangle.
    TriangleList,
}

/// Capability set implemented by every primitive.
pub trait Shape {
    /// Cached vertex positions in NDC. Regenerated on every mutation.
    fn vertices(&self) -> &[Vertex];

    /// Draw primitive mode for the vertex stream.
    fn topology(&self) -> Topology;

    /// Number of vertices to draw. Closed form; always equals
    /// `vertices().len()`.
    fn vertex_count(&self) -> u32;

    /// Mutation counter, bumped on every regeneration.
    fn revision(&self) -> u64;
}
