use core::fmt;
use core::str::FromStr;

use crate::correction::Correction;
use crate::error::{ConversionError, ParseThermocoupleTypeError};
use crate::log::{debug, trace};
use crate::range::ConversionTable;
use crate::tables;

/// The letter-designated thermocouple types with standard reference
/// polynomials.
///
/// The discriminant is the conventional numeric code of each type, as
/// accepted by [`TryFrom<u8>`] and the `*_raw` conversion functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ThermocoupleType {
    /// Platinum-13% rhodium / platinum
    R = 0,
    /// Platinum-10% rhodium / platinum
    S = 1,
    /// Platinum-30% rhodium / platinum-6% rhodium
    B = 2,
    /// Iron / constantan
    J = 3,
    /// Copper / constantan
    T = 4,
    /// Chromel / constantan
    E = 5,
    /// Chromel / alumel
    K = 6,
    /// Nicrosil / nisil
    N = 7,
}

impl ThermocoupleType {
    /// Every type, in code order.
    pub const ALL: [Self; 8] = [
        Self::R,
        Self::S,
        Self::B,
        Self::J,
        Self::T,
        Self::E,
        Self::K,
        Self::N,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn letter(self) -> char {
        match self {
            Self::R => 'R',
            Self::S => 'S',
            Self::B => 'B',
            Self::J => 'J',
            Self::T => 'T',
            Self::E => 'E',
            Self::K => 'K',
            Self::N => 'N',
        }
    }

    /// Returns the table and correction used for `direction`.
    pub fn conversion(self, direction: Direction) -> &'static Conversion {
        tables::conversion(self, direction)
    }

    /// Converts a thermocouple voltage in mV to a temperature in °C.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple::{ConversionError, ThermocoupleType};
    ///
    /// let celsius = ThermocoupleType::K.temperature(17.85).unwrap();
    /// assert!((celsius - 434.315).abs() < 0.001);
    ///
    /// assert!(matches!(
    ///     ThermocoupleType::K.temperature(1000.0),
    ///     Err(ConversionError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn temperature(self, millivolts: f64) -> Result<f64, ConversionError> {
        self.convert(Direction::VoltageToTemperature, millivolts)
    }

    /// Converts a temperature in °C to a thermocouple voltage in mV.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple::ThermocoupleType;
    ///
    /// let millivolts = ThermocoupleType::K.voltage(-156.0).unwrap();
    /// assert!((millivolts - -5.0517).abs() < 0.0001);
    /// ```
    pub fn voltage(self, celsius: f64) -> Result<f64, ConversionError> {
        self.convert(Direction::TemperatureToVoltage, celsius)
    }

    /// Returns the `(min, max)` voltage in mV accepted by
    /// [`temperature`](ThermocoupleType::temperature).
    pub fn voltage_range(self) -> (f64, f64) {
        self.conversion(Direction::VoltageToTemperature).range()
    }

    /// Returns the `(min, max)` temperature in °C accepted by
    /// [`voltage`](ThermocoupleType::voltage).
    pub fn temperature_range(self) -> (f64, f64) {
        self.conversion(Direction::TemperatureToVoltage).range()
    }

    fn convert(self, direction: Direction, value: f64) -> Result<f64, ConversionError> {
        let result = self.conversion(direction).convert(value);

        match result {
            Ok(converted) => trace!("type {} {}: {} -> {}", self, direction, value, converted),
            Err(error) => debug!("type {} {}: {}", self, direction, error),
        }

        result
    }
}

impl TryFrom<u8> for ThermocoupleType {
    type Error = ConversionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(ConversionError::InvalidType(code))
    }
}

impl FromStr for ThermocoupleType {
    type Err = ParseThermocoupleTypeError;

    /// Parses a type letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::ALL
                .into_iter()
                .find(|tc| tc.letter().eq_ignore_ascii_case(&letter))
                .ok_or(ParseThermocoupleTypeError),
            _ => Err(ParseThermocoupleTypeError),
        }
    }
}

impl fmt::Display for ThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which way a conversion goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// mV to °C, using the inverse polynomials.
    VoltageToTemperature,
    /// °C to mV, using the reference functions.
    TemperatureToVoltage,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VoltageToTemperature => f.write_str("mV -> °C"),
            Self::TemperatureToVoltage => f.write_str("°C -> mV"),
        }
    }
}

/// A conversion table with an optional correction applied to its
/// polynomial value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    table: ConversionTable,
    correction: Option<Correction>,
}

impl Conversion {
    pub const fn new(table: ConversionTable, correction: Option<Correction>) -> Self {
        Self { table, correction }
    }

    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    pub fn correction(&self) -> Option<&Correction> {
        self.correction.as_ref()
    }

    /// Evaluates the polynomial of the first segment containing `value`,
    /// then adds the correction, if any.
    pub fn convert(&self, value: f64) -> Result<f64, ConversionError> {
        let segment = self
            .table
            .locate(value)
            .ok_or_else(|| self.out_of_range(value))?;

        let result = segment.evaluate(value);

        Ok(match &self.correction {
            Some(correction) => correction.apply(value, result),
            None => result,
        })
    }

    fn range(&self) -> (f64, f64) {
        (self.table.min(), self.table.max())
    }

    fn out_of_range(&self, value: f64) -> ConversionError {
        let (min, max) = self.range();
        ConversionError::OutOfRange { value, min, max }
    }
}
