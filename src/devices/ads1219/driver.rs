//! ADS1219 I2C Driver Implementation
//!
//! Acquisition sequence for one sample:
//!
//! 1. Write the control register (WREG) and issue START/SYNC
//! 2. Wait the settle delay
//! 3. Poll DRDY (active low) with a bounded wait
//! 4. Issue RDATA and receive 3 bytes, MSB first
//!
//! The control register is re-sent before every conversion; the driver does not
//! track which channel the device is currently set to. Any failing step ends the
//! sequence, so a read is never attempted against an unconfigured converter.

use super::config::{Ads1219Config, ControlRegister, CURRENT_CHANNEL, VOLTAGE_CHANNEL};
use super::error::AdcError;
use super::registers;
use crate::platform::{BusStatus, GpioInterface, I2cInterface, PlatformError, TimerInterface};

/// Assemble a conversion result from its 3 received bytes (MSB first)
///
/// The value is taken as unsigned; no sign extension is applied.
pub fn assemble_sample(bytes: [u8; registers::SAMPLE_BYTES]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

/// ADS1219 driver
///
/// Holds the I2C bus, the DRDY input and a timer for the settle delay and the
/// data-ready timeout.
pub struct Ads1219<I2C, DRDY, T> {
    i2c: I2C,
    drdy: DRDY,
    timer: T,
    config: Ads1219Config,
}

impl<I2C, DRDY, T> Ads1219<I2C, DRDY, T>
where
    I2C: I2cInterface,
    DRDY: GpioInterface,
    T: TimerInterface,
{
    /// Create a driver; no bus traffic until [`Ads1219::init`] or a read
    pub fn new(i2c: I2C, drdy: DRDY, timer: T, config: Ads1219Config) -> Self {
        Self {
            i2c,
            drdy,
            timer,
            config,
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &Ads1219Config {
        &self.config
    }

    /// Borrow the bus (for inspection in tests and diagnostics)
    pub fn bus(&self) -> &I2C {
        &self.i2c
    }

    /// Borrow the timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Release the bus, DRDY pin and timer
    pub fn release(self) -> (I2C, DRDY, T) {
        (self.i2c, self.drdy, self.timer)
    }

    /// Power up and reset the converter
    ///
    /// Drives the power-down pin high (the analog front end is dead until it
    /// is), sends RESET, writes the voltage-channel configuration and starts
    /// conversions. Stops at the first failure.
    pub fn init<P: GpioInterface>(&mut self, power_pin: &mut P) -> Result<(), AdcError> {
        power_pin.set_high().map_err(|_| AdcError::Pin)?;

        self.command(registers::CMD_RESET)?;
        self.write_control_register(VOLTAGE_CHANNEL)?;
        self.command(registers::CMD_START_SYNC)?;

        crate::log_info!("ADS1219 initialized at {:#x}", self.config.address);
        Ok(())
    }

    /// Write the control register, start a conversion, and wait the settle delay
    pub fn configure(&mut self, register: ControlRegister) -> Result<(), AdcError> {
        self.write_control_register(register)?;
        self.command(registers::CMD_START_SYNC)?;
        self.timer
            .delay_ms(self.config.settle_ms)
            .map_err(|_| AdcError::Timer)
    }

    /// Wait for DRDY to go low
    ///
    /// # Errors
    ///
    /// `Timeout` if DRDY stays high for `ready_timeout_ms`.
    pub fn await_ready(&mut self) -> Result<(), AdcError> {
        let timeout_us = self.config.ready_timeout_ms as u64 * 1000;
        let interval_us = self.config.poll_interval_us.max(1);
        let start = self.timer.now_us();

        loop {
            if !self.drdy.read() {
                return Ok(());
            }
            if self.timer.now_us().saturating_sub(start) >= timeout_us {
                crate::log_warn!(
                    "ADS1219: DRDY not asserted after {} ms",
                    self.config.ready_timeout_ms
                );
                return Err(AdcError::Timeout);
            }
            self.timer
                .delay_us(interval_us)
                .map_err(|_| AdcError::Timer)?;
        }
    }

    /// Run one full acquisition on `register` and return the raw 24-bit value
    pub fn read_raw(&mut self, register: ControlRegister) -> Result<u32, AdcError> {
        self.configure(register)?;
        self.await_ready()?;

        self.command(registers::CMD_RDATA)?;
        let mut rx = [0u8; registers::SAMPLE_BYTES];
        self.i2c
            .read(self.config.address, &mut rx)
            .map_err(|e| transport_failure("RDATA", e))?;

        let raw = assemble_sample(rx);
        crate::log_trace!("ADS1219: raw {:#x} (mux {:?})", raw, register.mux);
        Ok(raw)
    }

    /// Raw voltage-channel reading, widened for calibration downstream
    pub fn read_voltage(&mut self) -> Result<f64, AdcError> {
        self.read_raw(VOLTAGE_CHANNEL).map(f64::from)
    }

    /// Raw current-channel reading, widened for calibration downstream
    pub fn read_current(&mut self) -> Result<f64, AdcError> {
        self.read_raw(CURRENT_CHANNEL).map(f64::from)
    }

    /// Check that the converter acknowledges its address
    ///
    /// One attempt, no retries, and no conversion is started. The wait is the
    /// bus timeout of the injected I2C implementation, so boards that need a
    /// short probe configure it there. How the address check is issued is up
    /// to [`I2cInterface::probe`]: an empty write by default, a 1-byte read
    /// through the embedded-hal adapter.
    pub fn probe(&mut self) -> bool {
        let result = self.i2c.probe(self.config.address);
        if let Err(e) = &result {
            crate::log_warn!(
                "ADS1219 not responding at {:#x}: status {}",
                self.config.address,
                BusStatus::from_error(e).code()
            );
        }
        result.is_ok()
    }

    /// Read back the control register
    pub fn read_control_register(&mut self) -> Result<ControlRegister, AdcError> {
        let mut rx = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &[registers::CMD_RREG_CONFIG], &mut rx)
            .map_err(|e| transport_failure("RREG", e))?;
        Ok(ControlRegister::from_bits(rx[0]))
    }

    /// Read the DRDY flag from the status register
    pub fn read_status(&mut self) -> Result<bool, AdcError> {
        let mut rx = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &[registers::CMD_RREG_STATUS], &mut rx)
            .map_err(|e| transport_failure("RREG", e))?;
        Ok(rx[0] & registers::STATUS_DRDY != 0)
    }

    /// Put the converter into power-down mode
    pub fn power_down(&mut self) -> Result<(), AdcError> {
        self.command(registers::CMD_POWERDOWN)
    }

    fn write_control_register(&mut self, register: ControlRegister) -> Result<(), AdcError> {
        self.i2c
            .write(self.config.address, &[registers::CMD_WREG, register.bits()])
            .map_err(|e| transport_failure("WREG", e))
    }

    fn command(&mut self, code: u8) -> Result<(), AdcError> {
        self.i2c
            .write(self.config.address, &[code])
            .map_err(|e| transport_failure("command", e))
    }
}

fn transport_failure(step: &str, error: PlatformError) -> AdcError {
    let status = BusStatus::from_error(&error);
    crate::log_error!("ADS1219: {} failed: status {}", step, status.code());
    AdcError::TransportFailure(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::ads1219::config::{ConversionMode, Mux};
    use crate::platform::error::I2cError;
    use crate::platform::mock::{I2cTransaction, MockGpio, MockI2c, MockTimer};

    type TestAdc = Ads1219<MockI2c, MockGpio, MockTimer>;

    /// DRDY idles high and drops after `high_reads` reads
    fn drdy(high_reads: usize) -> MockGpio {
        let mut pin = MockGpio::new_input();
        pin.set_input_state(true);
        let mut levels = vec![true; high_reads];
        levels.push(false);
        pin.script_levels(&levels);
        pin
    }

    fn new_adc(i2c: MockI2c, drdy: MockGpio) -> TestAdc {
        Ads1219::new(i2c, drdy, MockTimer::new(), Ads1219Config::default())
    }

    fn write(data: &[u8]) -> I2cTransaction {
        I2cTransaction::Write {
            addr: registers::ADS1219_ADDR,
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_assemble_sample_big_endian() {
        assert_eq!(assemble_sample([0x01, 0x02, 0x03]), 0x010203);
        assert_eq!(assemble_sample([0x01, 0x02, 0x03]), 66051);
        assert_eq!(assemble_sample([0xFF, 0xFF, 0xFF]), 0xFF_FFFF);
    }

    #[test]
    fn test_read_voltage_sequence_and_value() {
        let mut i2c = MockI2c::default();
        i2c.set_read_data(&[0x01, 0x02, 0x03]);
        let mut adc = new_adc(i2c, drdy(3));

        assert_eq!(adc.read_voltage().unwrap(), 66051.0);
        assert_eq!(
            adc.bus().transactions(),
            &[
                write(&[registers::CMD_WREG, 0x03]),
                write(&[registers::CMD_START_SYNC]),
                write(&[registers::CMD_RDATA]),
                I2cTransaction::Read {
                    addr: registers::ADS1219_ADDR,
                    len: 3
                },
            ]
        );
    }

    #[test]
    fn test_read_current_selects_current_channel() {
        let mut i2c = MockI2c::default();
        i2c.set_read_data(&[0x00, 0x10, 0x00]);
        let mut adc = new_adc(i2c, drdy(0));

        assert_eq!(adc.read_current().unwrap(), 4096.0);
        assert_eq!(
            adc.bus().transactions()[0],
            write(&[registers::CMD_WREG, 0x23])
        );
    }

    #[test]
    fn test_settle_delay_precedes_poll() {
        let mut adc = new_adc(MockI2c::default(), drdy(0));
        adc.read_voltage().unwrap();
        // 10 ms settle, DRDY already low on the first poll
        assert_eq!(adc.timer().now_us(), 10_000);
    }

    #[test]
    fn test_configuration_failure_short_circuits_read() {
        let mut i2c = MockI2c::default();
        i2c.fail_at(0, I2cError::Nack);
        let (i2c, pin, _) = {
            let mut adc = new_adc(i2c, drdy(0));
            assert_eq!(
                adc.read_voltage(),
                Err(AdcError::TransportFailure(BusStatus::Error))
            );
            adc.release()
        };

        assert_eq!(i2c.transaction_count(), 1);
        assert_eq!(pin.read_count(), 0);
    }

    #[test]
    fn test_start_failure_short_circuits_read() {
        let mut i2c = MockI2c::default();
        i2c.fail_at(1, I2cError::ArbitrationLost);
        let mut adc = new_adc(i2c, drdy(0));

        assert_eq!(
            adc.read_current(),
            Err(AdcError::TransportFailure(BusStatus::Busy))
        );
        assert_eq!(adc.bus().transaction_count(), 2);
    }

    #[test]
    fn test_ready_timeout() {
        let mut pin = MockGpio::new_input();
        pin.set_input_state(true);
        let mut adc = new_adc(MockI2c::default(), pin);

        assert_eq!(adc.read_voltage(), Err(AdcError::Timeout));
        // No RDATA after a timeout
        assert_eq!(adc.bus().transaction_count(), 2);
        assert!(adc.timer().now_us() >= 10_000 + 1_000_000);
    }

    #[test]
    fn test_await_ready_polls_until_low() {
        let mut adc = new_adc(MockI2c::default(), drdy(5));
        adc.await_ready().unwrap();
        assert_eq!(adc.timer().delay_calls(), 5);
        assert_eq!(adc.timer().now_us(), 500);
    }

    #[test]
    fn test_rdata_receive_failure() {
        let mut i2c = MockI2c::default();
        i2c.fail_at(3, I2cError::Timeout);
        let mut adc = new_adc(i2c, drdy(1));

        assert_eq!(
            adc.read_voltage(),
            Err(AdcError::TransportFailure(BusStatus::Unknown))
        );
        assert_eq!(adc.bus().transaction_count(), 4);
    }

    #[test]
    fn test_init_sequence() {
        let mut adc = new_adc(MockI2c::default(), drdy(0));
        let mut power = MockGpio::new_output();

        adc.init(&mut power).unwrap();

        assert!(power.read());
        assert_eq!(
            adc.bus().transactions(),
            &[
                write(&[registers::CMD_RESET]),
                write(&[registers::CMD_WREG, 0x03]),
                write(&[registers::CMD_START_SYNC]),
            ]
        );
    }

    #[test]
    fn test_init_stops_on_reset_failure() {
        let mut i2c = MockI2c::default();
        i2c.fail_at(0, I2cError::Nack);
        let mut adc = new_adc(i2c, drdy(0));

        assert!(adc.init(&mut MockGpio::new_output()).is_err());
        assert_eq!(adc.bus().transaction_count(), 1);
    }

    #[test]
    fn test_init_requires_output_power_pin() {
        let mut adc = new_adc(MockI2c::default(), drdy(0));
        assert_eq!(adc.init(&mut MockGpio::new_input()), Err(AdcError::Pin));
        assert_eq!(adc.bus().transaction_count(), 0);
    }

    #[test]
    fn test_probe() {
        let mut adc = new_adc(MockI2c::default(), drdy(0));
        assert!(adc.probe());
        assert_eq!(
            adc.bus().transactions(),
            &[I2cTransaction::Probe {
                addr: registers::ADS1219_ADDR
            }]
        );

        let mut i2c = MockI2c::default();
        i2c.remove_device(registers::ADS1219_ADDR);
        let mut missing = new_adc(i2c, drdy(0));
        assert!(!missing.probe());
    }

    #[test]
    fn test_read_control_register() {
        let mut i2c = MockI2c::default();
        i2c.set_read_data(&[0x23]);
        let mut adc = new_adc(i2c, drdy(0));

        let reg = adc.read_control_register().unwrap();
        assert_eq!(reg.mux, Mux::Ain2Ain3);
        assert_eq!(reg.mode, ConversionMode::Continuous);
        assert_eq!(reg, CURRENT_CHANNEL);
    }

    #[test]
    fn test_status_drdy_flag() {
        let mut i2c = MockI2c::default();
        i2c.set_read_data(&[0x80, 0x00]);
        let mut adc = new_adc(i2c, drdy(0));

        assert!(adc.read_status().unwrap());
        assert!(!adc.read_status().unwrap());
    }

    #[test]
    fn test_power_down() {
        let mut adc = new_adc(MockI2c::default(), drdy(0));
        adc.power_down().unwrap();
        assert_eq!(
            adc.bus().transactions(),
            &[write(&[registers::CMD_POWERDOWN])]
        );
    }
}
