//! Point-in-time summary of a reading series

use core::fmt;

/// Immutable snapshot of the four headline aggregates of a series
///
/// Built by [`SeriesStore::summarize`](super::SeriesStore::summarize). The
/// snapshot holds no reference to the store it came from, so later appends
/// or resets leave it untouched.
///
/// # Example
///
/// ```
/// use tempseries::SeriesStore;
///
/// let store = SeriesStore::from_readings(&[1.0, 2.0, 3.0]).unwrap();
/// let summary = store.summarize().unwrap();
///
/// assert_eq!(summary.average(), 2.0);
/// assert_eq!(summary.minimum(), 1.0);
/// assert_eq!(summary.maximum(), 3.0);
/// assert!((summary.deviation() - 0.816496580927726).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStatistics {
    average: f64,
    deviation: f64,
    minimum: f64,
    maximum: f64,
}

impl SummaryStatistics {
    pub(crate) fn new(average: f64, deviation: f64, minimum: f64, maximum: f64) -> Self {
        Self {
            average,
            deviation,
            minimum,
            maximum,
        }
    }

    /// Arithmetic mean of the readings
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Population standard deviation of the readings
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    /// Lowest reading
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Highest reading
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Spread between the highest and lowest reading
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg={:.3} dev={:.3} min={:.3} max={:.3}",
            self.average, self.deviation, self.minimum, self.maximum
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SummaryStatistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SummaryStatistics", 4)?;
        state.serialize_field("average", &self.average)?;
        state.serialize_field("deviation", &self.deviation)?;
        state.serialize_field("minimum", &self.minimum)?;
        state.serialize_field("maximum", &self.maximum)?;
        state.end()
    }
}
