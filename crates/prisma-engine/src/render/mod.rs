//! GPU rendering subsystem.
//!
//! Each shape instance owns its GPU resources through a [`ShapeRenderer`]:
//! one vertex buffer, one pipeline compiled from the appearance's
//! generated WGSL, and the time-uniform binding.
//!
//! Convention:
//! - CPU geometry is generated in NDC by `shape::*`
//! - the vertex shader is a passthrough; there is no per-frame transform

mod common;
mod ctx;
mod shape_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use shape_renderer::ShapeRenderer;
