//! Prisma engine crate.
//!
//! A minimal educational renderer: CPU-side shape generators, a
//! color-to-shader appearance policy, GPU device bootstrap, per-shape GPU
//! resources, and a small window runtime to drive it all.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod shape;
pub mod appearance;
pub mod render;
