//! Coordinate types shared by shape generators.
//!
//! Canonical CPU space is normalized device coordinates (NDC):
//! - origin at the window center
//! - +X right, +Y up
//! - visible range [-1, 1] on both axes
//!
//! The vertex shader is a passthrough, so whatever the generators emit is
//! what lands on screen.

mod vec2;

pub use vec2::Vec2;
