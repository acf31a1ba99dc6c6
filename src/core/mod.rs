//! Core node infrastructure
//!
//! Logging macros shared by every driver, and the boot-time health checks.

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{run_startup_checks, StartupReport};
