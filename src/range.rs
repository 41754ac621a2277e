use crate::polynomial;

/// One sub-interval of a conversion domain and the polynomial valid on it.
///
/// Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSegment {
    pub min: f64,
    pub max: f64,
    /// `coefficients[k]` multiplies `x^k`.
    pub coefficients: &'static [f64],
}

impl RangeSegment {
    /// Returns `true` if `min <= value <= max`. `NaN` is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Evaluates this segment's polynomial at `x`, whether or not `x`
    /// lies within the segment.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        polynomial::evaluate(self.coefficients, x)
    }
}

/// An ordered set of [`RangeSegment`]s covering the domain of one
/// thermocouple type in one conversion direction.
///
/// Segments must be in ascending order by `min`. Where two segments
/// share a boundary, [`locate`](ConversionTable::locate) returns the
/// one listed first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionTable {
    segments: &'static [RangeSegment],
}

impl ConversionTable {
    /// Returns a table over `segments`.
    ///
    /// `segments` must not be empty and must be sorted by `min`; see
    /// [`is_ascending`](ConversionTable::is_ascending).
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple::{ConversionTable, RangeSegment};
    ///
    /// static SEGMENTS: [RangeSegment; 2] = [
    ///     RangeSegment { min: -1.0, max: 0.0, coefficients: &[0.0, -2.0] },
    ///     RangeSegment { min: 0.0, max: 1.0, coefficients: &[0.0, 3.0] },
    /// ];
    ///
    /// let table = ConversionTable::new(&SEGMENTS);
    ///
    /// // The boundary at 0.0 belongs to the first segment
    /// assert_eq!(table.locate(0.0), Some(&SEGMENTS[0]));
    /// assert_eq!(table.locate(0.5).map(|s| s.evaluate(0.5)), Some(1.5));
    /// assert_eq!(table.locate(1.5), None);
    /// ```
    pub const fn new(segments: &'static [RangeSegment]) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &'static [RangeSegment] {
        self.segments
    }

    /// Returns the first segment containing `value`, or `None` if
    /// `value` falls outside every segment.
    pub fn locate(&self, value: f64) -> Option<&'static RangeSegment> {
        self.segments.iter().find(|segment| segment.contains(value))
    }

    /// Returns the smallest input accepted by this table.
    pub fn min(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.min)
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns the largest input accepted by this table.
    pub fn max(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.max)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns `true` if every segment has `min <= max` and segments are
    /// listed in ascending order by `min`.
    pub fn is_ascending(&self) -> bool {
        self.segments.iter().all(|s| s.min <= s.max)
            && self.segments.windows(2).all(|w| w[0].min <= w[1].min)
    }
}
