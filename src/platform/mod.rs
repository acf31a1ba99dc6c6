//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the bus, pins and timing the
//! drivers depend on. Drivers receive these as injected trait implementations,
//! never as global handles.

pub mod error;
pub mod traits;

// embedded-hal bindings (feature-gated)
#[cfg(feature = "hal")]
pub mod hal;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{BusStatus, PlatformError, Result};
pub use traits::{GpioInterface, I2cInterface, TimerInterface};
