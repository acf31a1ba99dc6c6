//! FRAM storage driver
//!
//! Byte-addressable persistence on a paged I2C FRAM (FM24CL16-class, 2 KiB).
//!
//! ## Modules
//!
//! - `address`: logical to page/segment translation and bus address encoding
//! - `driver`: byte-serial read/write transport
//! - `buffer_state`: persisted circular-buffer cursors
//! - `config_record`: versioned user-configuration record
//! - `layout`: reserved regions of the address space
//! - `mock`: in-memory FRAM device for tests

pub mod address;
pub mod buffer_state;
pub mod config_record;
pub mod driver;
pub mod error;
pub mod layout;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use address::{FramGeometry, LogicalAddress, PhysicalAddress, FRAM_PAGES, FRAM_SEG_SIZE};
pub use buffer_state::BufferState;
pub use config_record::{ConfigFlags, NodeConfig};
pub use driver::Fram;
pub use error::{StorageError, StorageStatus};
pub use layout::{BUFFER_STATE_ADDR, DATA_START_ADDR, USER_CONFIG_ADDR};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockFramDevice;
