/// Evaluates `c0 + c1*x + c2*x^2 + ... + cn*x^n` using Horner's method.
///
/// `coefficients[k]` is the coefficient of `x^k`. An empty slice
/// evaluates to `0.0`; every table in this crate has at least one
/// coefficient per segment.
///
/// # Examples
///
/// ```
/// use thermocouple::polynomial::evaluate;
///
/// // 1 + 2x + 3x^2 at x = 2
/// assert_eq!(evaluate(&[1.0, 2.0, 3.0], 2.0), 17.0);
/// ```
#[inline]
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |result, coefficient| result * x + coefficient)
}
