//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and sample
//! apps: the `App` callback trait and the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
