//! embedded-hal bindings
//!
//! Adapters from the `embedded-hal` 1.0 blocking traits to the platform traits,
//! so the drivers run on any HAL that implements them (STM32, RP2040, ESP32, ...).
//!
//! # Example
//!
//! ```ignore
//! use soil_power_sensor::platform::hal::{HalDelay, HalI2c, HalInputPin};
//! use soil_power_sensor::devices::ads1219::{Ads1219, Ads1219Config};
//!
//! let mut adc = Ads1219::new(
//!     HalI2c::new(i2c2),
//!     HalInputPin::new(drdy_pin),
//!     HalDelay::new(delay),
//!     Ads1219Config::default(),
//! );
//! let raw = adc.read_voltage()?;
//! ```

use crate::platform::{
    error::{GpioError, I2cError, PlatformError},
    traits::{GpioInterface, GpioMode, I2cInterface, TimerInterface},
    Result,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C bus implementing `I2cInterface` over an `embedded_hal::i2c::I2c`
pub struct HalI2c<I> {
    i2c: I,
}

impl<I: I2c> HalI2c<I> {
    /// Wrap a HAL I2C bus
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the HAL bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cInterface for HalI2c<I> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.i2c
            .write(addr, data)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .read(addr, buffer)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(addr, write_data, read_buffer)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        // embedded-hal has no runtime frequency control; the HAL fixes it at init
        Ok(())
    }

    /// Address check as a 1-byte read; some HALs reject zero-length writes
    fn probe(&mut self, addr: u8) -> Result<()> {
        let mut scratch = [0u8; 1];
        self.i2c
            .read(addr, &mut scratch)
            .map_err(|e| map_error_kind(e.kind()))
    }
}

/// Map embedded-hal I2C error kinds to platform I2C errors
fn map_error_kind(kind: ErrorKind) -> PlatformError {
    match kind {
        ErrorKind::NoAcknowledge(_) => PlatformError::I2c(I2cError::Nack),
        ErrorKind::ArbitrationLoss => PlatformError::I2c(I2cError::ArbitrationLost),
        ErrorKind::Bus | ErrorKind::Overrun => PlatformError::I2c(I2cError::BusError),
        _ => PlatformError::I2c(I2cError::Timeout),
    }
}

/// Input pin implementing `GpioInterface` over an `embedded_hal::digital::InputPin`
///
/// Read errors report the line as high.
pub struct HalInputPin<P> {
    pin: P,
}

impl<P: InputPin> HalInputPin<P> {
    /// Wrap a HAL input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> GpioInterface for HalInputPin<P> {
    fn set_high(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn set_low(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn toggle(&mut self) -> Result<()> {
        Err(PlatformError::Gpio(GpioError::InvalidMode))
    }

    fn read(&mut self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        GpioMode::Input
    }
}

/// Output pin implementing `GpioInterface` over an `embedded_hal::digital::OutputPin`
///
/// The driven level is tracked locally since `OutputPin` cannot be read back.
pub struct HalOutputPin<P> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> HalOutputPin<P> {
    /// Wrap a HAL output pin, assumed to start low
    pub fn new(pin: P) -> Self {
        Self { pin, level: false }
    }
}

impl<P: OutputPin> GpioInterface for HalOutputPin<P> {
    fn set_high(&mut self) -> Result<()> {
        self.pin
            .set_high()
            .map_err(|_| PlatformError::Gpio(GpioError::PinFault))?;
        self.level = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin
            .set_low()
            .map_err(|_| PlatformError::Gpio(GpioError::PinFault))?;
        self.level = false;
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        if self.level {
            self.set_low()
        } else {
            self.set_high()
        }
    }

    fn read(&mut self) -> bool {
        self.level
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if !mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}

/// Timer implementing `TimerInterface` over an `embedded_hal::delay::DelayNs`
///
/// `DelayNs` has no clock, so `now_us` is the sum of the delays issued through
/// this adapter. That is enough for bounded polling loops built from delays.
pub struct HalDelay<D> {
    delay: D,
    elapsed_us: u64,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wrap a HAL delay provider
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            elapsed_us: 0,
        }
    }
}

impl<D: DelayNs> TimerInterface for HalDelay<D> {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.delay.delay_us(us);
        self.elapsed_us = self.elapsed_us.saturating_add(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay.delay_ms(ms);
        self.elapsed_us = self.elapsed_us.saturating_add(ms as u64 * 1000);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.elapsed_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::ads1219::{AdcError, Ads1219, Ads1219Config};
    use crate::platform::mock::{MockGpio, MockI2c};
    use crate::platform::BusStatus;
    use embedded_hal::i2c::{NoAcknowledgeSource, Operation};

    /// Records operations as (address, is_read, length)
    #[derive(Default)]
    struct StubI2c {
        ops: Vec<(u8, bool, usize)>,
        fail: Option<ErrorKind>,
    }

    impl embedded_hal::i2c::ErrorType for StubI2c {
        type Error = ErrorKind;
    }

    impl I2c for StubI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> core::result::Result<(), Self::Error> {
            for op in operations.iter_mut() {
                match op {
                    Operation::Read(buf) => {
                        buf.fill(0xA5);
                        self.ops.push((address, true, buf.len()));
                    }
                    Operation::Write(data) => self.ops.push((address, false, data.len())),
                }
            }
            match self.fail {
                Some(kind) => Err(kind),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct StubDelay {
        total_ns: u64,
    }

    impl DelayNs for StubDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    struct StubInput {
        level: core::result::Result<bool, embedded_hal::digital::ErrorKind>,
    }

    impl embedded_hal::digital::ErrorType for StubInput {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl InputPin for StubInput {
        fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
            self.level
        }

        fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
            self.level.map(|high| !high)
        }
    }

    #[derive(Default)]
    struct StubOutput {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for StubOutput {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for StubOutput {
        fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            map_error_kind(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            PlatformError::I2c(I2cError::Nack)
        );
        assert_eq!(
            map_error_kind(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)),
            PlatformError::I2c(I2cError::Nack)
        );
        assert_eq!(
            map_error_kind(ErrorKind::ArbitrationLoss),
            PlatformError::I2c(I2cError::ArbitrationLost)
        );
        assert_eq!(
            map_error_kind(ErrorKind::Bus),
            PlatformError::I2c(I2cError::BusError)
        );
        assert_eq!(
            map_error_kind(ErrorKind::Overrun),
            PlatformError::I2c(I2cError::BusError)
        );
        assert_eq!(
            map_error_kind(ErrorKind::Other),
            PlatformError::I2c(I2cError::Timeout)
        );
    }

    #[test]
    fn test_error_kind_bus_status() {
        let status = |kind| BusStatus::from_error(&map_error_kind(kind)).code();
        assert_eq!(status(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)), 1);
        assert_eq!(status(ErrorKind::Bus), 1);
        assert_eq!(status(ErrorKind::ArbitrationLoss), 2);
        assert_eq!(status(ErrorKind::Other), 3);
    }

    #[test]
    fn test_i2c_forwards_and_maps_errors() {
        let mut i2c = HalI2c::new(StubI2c::default());
        i2c.write(0x50, &[0x10, 0xAB]).unwrap();
        let mut rx = [0u8; 1];
        i2c.write_read(0x50, &[0x10], &mut rx).unwrap();
        assert_eq!(rx, [0xA5]);

        let mut stub = i2c.release();
        assert_eq!(stub.ops, vec![(0x50, false, 2), (0x50, false, 1), (0x50, true, 1)]);

        stub.fail = Some(ErrorKind::ArbitrationLoss);
        let mut i2c = HalI2c::new(stub);
        assert_eq!(
            i2c.write(0x50, &[0x00]),
            Err(PlatformError::I2c(I2cError::ArbitrationLost))
        );
    }

    #[test]
    fn test_probe_is_single_byte_read() {
        let mut i2c = HalI2c::new(StubI2c::default());
        i2c.probe(0x40).unwrap();
        assert_eq!(i2c.release().ops, vec![(0x40, true, 1)]);

        let mut i2c = HalI2c::new(StubI2c {
            fail: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
            ..Default::default()
        });
        assert_eq!(i2c.probe(0x40), Err(PlatformError::I2c(I2cError::Nack)));
    }

    #[test]
    fn test_delay_advances_clock() {
        let mut timer = HalDelay::new(StubDelay::default());
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(250).unwrap();
        timer.delay_ms(3).unwrap();

        assert_eq!(timer.now_us(), 3_250);
        assert_eq!(timer.now_ms(), 3);
        assert_eq!(timer.delay.total_ns, 3_250_000);
    }

    #[test]
    fn test_delay_lets_ready_wait_time_out() {
        let mut drdy = MockGpio::new_input();
        drdy.set_input_state(true);
        let config = Ads1219Config {
            ready_timeout_ms: 2,
            ..Default::default()
        };
        let mut adc = Ads1219::new(
            MockI2c::default(),
            drdy,
            HalDelay::new(StubDelay::default()),
            config,
        );

        assert_eq!(adc.await_ready(), Err(AdcError::Timeout));
        assert!(adc.timer().now_us() >= 2_000);
    }

    #[test]
    fn test_input_pin() {
        let mut pin = HalInputPin::new(StubInput { level: Ok(false) });
        assert!(!pin.read());
        assert_eq!(pin.mode(), GpioMode::Input);
        assert!(pin.set_high().is_err());

        // A failed read must not look like DRDY asserted
        let mut faulty = HalInputPin::new(StubInput {
            level: Err(embedded_hal::digital::ErrorKind::Other),
        });
        assert!(faulty.read());
    }

    #[test]
    fn test_output_pin_tracks_level() {
        let mut pin = HalOutputPin::new(StubOutput::default());
        assert!(!pin.read());

        pin.set_high().unwrap();
        assert!(pin.read());
        assert!(pin.pin.high);

        pin.toggle().unwrap();
        assert!(!pin.read());
        assert!(!pin.pin.high);
        assert!(pin.set_mode(GpioMode::Input).is_err());
    }
}
