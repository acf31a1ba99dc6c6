//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use std::collections::VecDeque;

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode for test verification. Input pins can
/// be given a script of levels that successive reads consume before falling
/// back to the steady state.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    script: VecDeque<bool>,
    reads: usize,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            script: VecDeque::new(),
            reads: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            script: VecDeque::new(),
            reads: 0,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Queue levels returned by the next reads, in order
    pub fn script_levels(&mut self, levels: &[bool]) {
        self.script.extend(levels.iter().copied());
    }

    /// Number of times the pin has been read
    pub fn read_count(&self) -> usize {
        self.reads
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.state = !self.state;
        Ok(())
    }

    fn read(&mut self) -> bool {
        self.reads += 1;
        self.script.pop_front().unwrap_or(self.state)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
