//! Core traits and error types for reading series
//!
//! Every series container implements the base [`Series`] trait. Fallible
//! operations report a [`SeriesError`].

/// The lowest physically valid reading, in degrees Celsius.
///
/// The floor is inclusive: a reading of exactly `-273.0` is accepted.
pub const ABSOLUTE_ZERO: f64 = -273.0;

/// Error returned by series construction, mutation and aggregate queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A supplied reading is strictly below [`ABSOLUTE_ZERO`]
    BelowAbsoluteZero {
        /// The first offending reading
        value: f64,
    },
    /// The query needs at least one reading
    Empty,
}

impl SeriesError {
    /// Whether this is a validation failure on supplied readings
    pub fn is_validation(&self) -> bool {
        matches!(self, SeriesError::BelowAbsoluteZero { .. })
    }

    /// Whether this is an empty-series failure
    pub fn is_empty_state(&self) -> bool {
        matches!(self, SeriesError::Empty)
    }
}

impl core::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SeriesError::BelowAbsoluteZero { value } => {
                write!(f, "value below absolute zero: {} < {}", value, ABSOLUTE_ZERO)
            }
            SeriesError::Empty => write!(f, "series is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeriesError {}

/// Check a batch of readings against the absolute-zero floor
///
/// Returns the first reading strictly below the floor as an error.
pub fn validate(readings: &[f64]) -> Result<(), SeriesError> {
    match readings.iter().find(|&&value| value < ABSOLUTE_ZERO) {
        Some(&value) => Err(SeriesError::BelowAbsoluteZero { value }),
        None => Ok(()),
    }
}

/// Core trait for reading containers
pub trait Series {
    /// Number of readings currently held
    fn len(&self) -> usize;

    /// Drop every reading, returning to the empty state
    fn clear(&mut self);

    /// Memory usage in bytes, including the backing buffer
    fn size_bytes(&self) -> usize;

    /// Check if the series holds no readings
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
