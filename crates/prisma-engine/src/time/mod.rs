//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented
//! frame. `FrameTime::elapsed` is the monotonically growing seconds value
//! that drives the `u_time` shader uniform.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
