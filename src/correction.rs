/// An additive term applied after a table's polynomial has been evaluated.
///
/// Only the type K reference function carries one, but any
/// [`Conversion`](crate::Conversion) may attach a correction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Correction {
    /// `a0 * exp(a1 * (x - a2)^2)`, added only when `x > 0`.
    Exponential { a0: f64, a1: f64, a2: f64 },
}

impl Correction {
    /// Returns the amount to add to the polynomial value at `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple::Correction;
    ///
    /// let correction = Correction::Exponential { a0: 2.0, a1: -1.0, a2: 1.0 };
    ///
    /// assert_eq!(correction.term(0.0), 0.0);
    /// assert_eq!(correction.term(1.0), 2.0);
    /// ```
    pub fn term(&self, x: f64) -> f64 {
        match *self {
            Self::Exponential { a0, a1, a2 } => {
                if x > 0.0 {
                    let d = x - a2;
                    a0 * libm::exp(a1 * d * d)
                } else {
                    0.0
                }
            }
        }
    }

    /// Returns `value` with the correction for `x` added.
    #[inline]
    pub fn apply(&self, x: f64, value: f64) -> f64 {
        value + self.term(x)
    }
}
