//! Conversion between thermocouple voltage (mV) and temperature (°C)
//! for types R, S, B, J, T, E, K and N, using the standard piecewise
//! polynomial approximations.
//!
//! Every conversion is a pure function over compiled-in tables: no
//! allocation, no locks, no I/O. Conversions are safe to call from any
//! thread or interrupt handler.
//!
//! Two flavours of API are provided:
//!
//! - [`temperature`] and [`voltage`] return a `Result` describing why a
//!   conversion failed.
//! - [`convert_voltage_to_temperature`] and
//!   [`convert_temperature_to_voltage`] return [`CONVERSION_FAILED`]
//!   instead, for callers that prefer a plain comparison.
//!
//! # Examples
//!
//! ```
//! use thermocouple::{
//!     convert_temperature_to_voltage, convert_voltage_to_temperature, ThermocoupleType,
//!     CONVERSION_FAILED,
//! };
//!
//! let celsius = convert_voltage_to_temperature(ThermocoupleType::K, 17.85);
//! assert_ne!(celsius, CONVERSION_FAILED);
//!
//! let millivolts = convert_temperature_to_voltage(ThermocoupleType::K, -156.0);
//! assert_ne!(millivolts, CONVERSION_FAILED);
//!
//! // Far outside the type K voltage range
//! assert_eq!(
//!     convert_voltage_to_temperature(ThermocoupleType::K, 1000.0),
//!     CONVERSION_FAILED
//! );
//! ```

#![cfg_attr(not(test), no_std)]

mod correction;
mod error;
mod log;
pub mod polynomial;
mod range;
mod tables;
mod thermocouple;

pub use correction::Correction;
pub use error::{ConversionError, ParseThermocoupleTypeError};
pub use range::{ConversionTable, RangeSegment};
pub use thermocouple::{Conversion, Direction, ThermocoupleType};

/// Returned by the sentinel conversion functions when a conversion
/// fails. Lies outside every type's voltage and temperature range.
pub const CONVERSION_FAILED: f64 = -1.0e6;

/// Converts a voltage in mV to a temperature in °C.
///
/// Returns [`ConversionError::OutOfRange`] if `millivolts` is outside
/// the range covered by `tc`'s tables.
///
/// # Examples
///
/// ```
/// use thermocouple::{temperature, ThermocoupleType};
///
/// assert_eq!(temperature(ThermocoupleType::J, 0.0), Ok(0.0));
/// ```
pub fn temperature(tc: ThermocoupleType, millivolts: f64) -> Result<f64, ConversionError> {
    tc.temperature(millivolts)
}

/// Converts a temperature in °C to a voltage in mV.
///
/// Returns [`ConversionError::OutOfRange`] if `celsius` is outside the
/// range covered by `tc`'s tables.
///
/// # Examples
///
/// ```
/// use thermocouple::{voltage, ConversionError, ThermocoupleType};
///
/// assert!(voltage(ThermocoupleType::T, 100.0).is_ok());
/// assert_eq!(
///     voltage(ThermocoupleType::T, 500.0),
///     Err(ConversionError::OutOfRange { value: 500.0, min: -270.5, max: 400.5 })
/// );
/// ```
pub fn voltage(tc: ThermocoupleType, celsius: f64) -> Result<f64, ConversionError> {
    tc.voltage(celsius)
}

/// Converts a voltage in mV to a temperature in °C, returning
/// [`CONVERSION_FAILED`] if `millivolts` is out of range.
pub fn convert_voltage_to_temperature(tc: ThermocoupleType, millivolts: f64) -> f64 {
    temperature(tc, millivolts).unwrap_or(CONVERSION_FAILED)
}

/// Converts a temperature in °C to a voltage in mV, returning
/// [`CONVERSION_FAILED`] if `celsius` is out of range.
pub fn convert_temperature_to_voltage(tc: ThermocoupleType, celsius: f64) -> f64 {
    voltage(tc, celsius).unwrap_or(CONVERSION_FAILED)
}

/// Like [`convert_voltage_to_temperature`], taking the type as its
/// numeric code. Returns [`CONVERSION_FAILED`] for codes outside `0..=7`.
///
/// # Examples
///
/// ```
/// use thermocouple::{convert_voltage_to_temperature_raw, CONVERSION_FAILED};
///
/// assert_ne!(convert_voltage_to_temperature_raw(6, 17.85), CONVERSION_FAILED);
/// assert_eq!(convert_voltage_to_temperature_raw(8, 17.85), CONVERSION_FAILED);
/// ```
pub fn convert_voltage_to_temperature_raw(code: u8, millivolts: f64) -> f64 {
    ThermocoupleType::try_from(code)
        .and_then(|tc| tc.temperature(millivolts))
        .unwrap_or(CONVERSION_FAILED)
}

/// Like [`convert_temperature_to_voltage`], taking the type as its
/// numeric code. Returns [`CONVERSION_FAILED`] for codes outside `0..=7`.
pub fn convert_temperature_to_voltage_raw(code: u8, celsius: f64) -> f64 {
    ThermocoupleType::try_from(code)
        .and_then(|tc| tc.voltage(celsius))
        .unwrap_or(CONVERSION_FAILED)
}
