//! Logging utilities.
//!
//! Centralizes logger initialization. The rest of the crate only speaks
//! the `log` facade; `env_logger` is the single backend choice made here.

mod init;

pub use init::{init_logging, LoggingConfig};
