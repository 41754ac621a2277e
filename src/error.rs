//! Error types for thermocouple conversions.

use thiserror::Error;

/// Error returned when a conversion cannot produce a value.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ConversionError {
    /// Raw type code outside the eight defined thermocouple types.
    #[error("invalid thermocouple type code {0}")]
    InvalidType(u8),

    /// Input fell outside every segment of the selected table.
    #[error("input {value} is outside the supported range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Error returned when parsing a [`ThermocoupleType`](crate::ThermocoupleType)
/// from a string fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[error("unknown thermocouple type, expected one of R, S, B, J, T, E, K, N")]
pub struct ParseThermocoupleTypeError;
