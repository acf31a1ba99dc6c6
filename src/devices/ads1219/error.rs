//! ADS1219 error types

use crate::platform::BusStatus;
use core::fmt;

/// Errors from ADC acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// A bus transaction did not complete
    TransportFailure(BusStatus),
    /// Data-ready was not asserted within the configured wait
    Timeout,
    /// The delay provider failed
    Timer,
    /// A control pin could not be driven
    Pin,
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::TransportFailure(status) => {
                write!(f, "ADC transaction failed: bus status {}", status)
            }
            AdcError::Timeout => write!(f, "ADC data-ready timeout"),
            AdcError::Timer => write!(f, "ADC delay failed"),
            AdcError::Pin => write!(f, "ADC control pin fault"),
        }
    }
}
