//! Shared GPU types and utilities used by the shape renderer.

use bytemuck::{Pod, Zeroable};

use crate::shape::{Topology, Vertex};

// ── time uniform ──────────────────────────────────────────────────────────

/// Host-side mirror of the WGSL `TimeUniform` struct (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct TimeUniform {
    pub secs: f32,
    pub _pad: [f32; 3],
}

/// Returns the `wgpu` minimum binding size for the time uniform buffer.
///
/// Centralising this avoids `.unwrap()` at the pipeline-creation site;
/// `TimeUniform` is 16 bytes by construction.
pub(super) fn time_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<TimeUniform>() as u64)
        .expect("TimeUniform has non-zero size by construction")
}

// ── vertex layout ─────────────────────────────────────────────────────────

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

pub(super) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

// ── topology mapping ──────────────────────────────────────────────────────

pub(super) fn wgpu_topology(t: Topology) -> wgpu::PrimitiveTopology {
    match t {
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
    }
}

#[cfg(test)]
mod tests {
    use bytemuck::Zeroable;

    use super::*;

    #[test]
    fn time_uniform_is_16_bytes() {
        // The generated WGSL declares secs + three f32 pads; the host
        // struct and the minimum binding size must agree with that.
        assert_eq!(std::mem::size_of::<TimeUniform>(), 16);
        assert_eq!(time_ubo_min_binding_size().get(), 16);
    }

    #[test]
    fn time_uniform_starts_zeroed() {
        // The initial UBO contents uploaded at renderer construction.
        let u = TimeUniform::zeroed();
        assert_eq!(bytemuck::bytes_of(&u), &[0u8; 16]);
    }

    #[test]
    fn vertex_layout_matches_vertex_stride() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex>() as u64);
        assert_eq!(layout.attributes.len(), 1);
    }
}
