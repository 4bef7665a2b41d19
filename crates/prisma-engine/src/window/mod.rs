//! Window + platform runtime.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
