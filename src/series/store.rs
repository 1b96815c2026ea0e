//! Validated, growable store of temperature readings
//!
//! Aggregate queries need at least one reading and return
//! [`SeriesError::Empty`] otherwise. Filters never fail and always hand
//! back owned vectors.

use super::SummaryStatistics;
use crate::math;
use crate::traits::{validate, Series, SeriesError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Ordered collection of readings with descriptive-statistics queries
///
/// Every stored reading is at or above [`ABSOLUTE_ZERO`](crate::ABSOLUTE_ZERO).
/// Insertion order is preserved and duplicates are allowed.
///
/// # Example
///
/// ```
/// use tempseries::{SeriesError, SeriesStore};
///
/// let mut store = SeriesStore::from_readings(&[1.0, 2.0]).unwrap();
/// assert_eq!(store.add_readings(&[3.0, 4.0]), Ok(4));
///
/// assert_eq!(store.average(), Ok(2.5));
/// assert_eq!(store.sorted_snapshot(), vec![1.0, 2.0, 3.0, 4.0]);
///
/// // All-or-nothing: one bad reading rejects the whole batch
/// assert!(store.add_readings(&[5.0, -300.0]).is_err());
/// assert_eq!(store.len(), 4);
///
/// store.reset();
/// assert_eq!(store.average(), Err(SeriesError::Empty));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesStore {
    /// Readings in insertion order
    readings: Vec<f64>,
}

impl SeriesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    /// Create an empty store with room for `capacity` readings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
        }
    }

    /// Create a store holding a copy of `readings`
    ///
    /// Fails with [`SeriesError::BelowAbsoluteZero`] if any reading is
    /// below the floor; no store is built in that case.
    pub fn from_readings(readings: &[f64]) -> Result<Self, SeriesError> {
        Self::check(readings)?;
        Ok(Self {
            readings: readings.to_vec(),
        })
    }

    /// Append readings, returning the new count
    ///
    /// The whole batch is validated before anything is stored. Backing
    /// capacity at least doubles whenever it runs out.
    pub fn add_readings(&mut self, readings: &[f64]) -> Result<usize, SeriesError> {
        Self::check(readings)?;

        let required = self.readings.len() + readings.len();
        if required > self.readings.capacity() {
            let target = required.max(self.readings.capacity() * 2);
            #[cfg(feature = "logging")]
            log::trace!(
                "growing series capacity from {} to {}",
                self.readings.capacity(),
                target
            );
            self.readings.reserve_exact(target - self.readings.len());
        }

        self.readings.extend_from_slice(readings);
        Ok(self.readings.len())
    }

    /// Drop every reading
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("resetting series of {} readings", self.readings.len());
        self.readings.clear();
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the store holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of readings the backing buffer holds without reallocating
    pub fn capacity(&self) -> usize {
        self.readings.capacity()
    }

    /// Iterate over the readings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().copied()
    }

    /// Owned copy of the readings in insertion order
    pub fn to_vec(&self) -> Vec<f64> {
        self.readings.clone()
    }

    /// Arithmetic mean of the readings
    pub fn average(&self) -> Result<f64, SeriesError> {
        self.ensure_non_empty()?;
        let sum: f64 = self.readings.iter().sum();
        Ok(sum / self.readings.len() as f64)
    }

    /// Population standard deviation (divisor is the count, not count - 1)
    pub fn deviation(&self) -> Result<f64, SeriesError> {
        let mean = self.average()?;
        let squares: f64 = self
            .readings
            .iter()
            .map(|&x| (x - mean) * (x - mean))
            .sum();
        Ok(math::sqrt(squares / self.readings.len() as f64))
    }

    /// Lowest reading
    pub fn min(&self) -> Result<f64, SeriesError> {
        let (&first, rest) = self.split_first()?;
        Ok(rest
            .iter()
            .fold(first, |min, &x| if x < min { x } else { min }))
    }

    /// Highest reading
    pub fn max(&self) -> Result<f64, SeriesError> {
        let (&first, rest) = self.split_first()?;
        Ok(rest
            .iter()
            .fold(first, |max, &x| if x > max { x } else { max }))
    }

    /// Reading closest to zero; see [`find_closest_to_value`](Self::find_closest_to_value)
    pub fn find_closest_to_zero(&self) -> Result<f64, SeriesError> {
        self.find_closest_to_value(0.0)
    }

    /// Reading with the smallest distance to `target`
    ///
    /// When two readings are equally far from `target` the larger one wins,
    /// so `{-0.5, 0.5}` resolves to `0.5` for a target of zero.
    pub fn find_closest_to_value(&self, target: f64) -> Result<f64, SeriesError> {
        let (&first, rest) = self.split_first()?;
        let mut closest = first;
        let mut best = math::abs(first - target);

        for &x in rest {
            let distance = math::abs(x - target);
            if distance < best || (distance == best && x > closest) {
                closest = x;
                best = distance;
            }
        }

        Ok(closest)
    }

    /// Readings strictly below `threshold`, in insertion order
    pub fn find_less_than(&self, threshold: f64) -> Vec<f64> {
        self.filter(|x| x < threshold)
    }

    /// Readings at or above `threshold`, in insertion order
    pub fn find_greater_or_equal(&self, threshold: f64) -> Vec<f64> {
        self.filter(|x| x >= threshold)
    }

    /// Readings within `[low, high]`, both bounds inclusive, in insertion order
    pub fn find_in_range(&self, low: f64, high: f64) -> Vec<f64> {
        self.filter(|x| low <= x && x <= high)
    }

    /// Readings sorted ascending; the store itself is left as is
    pub fn sorted_snapshot(&self) -> Vec<f64> {
        let mut sorted = self.readings.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// Snapshot average, deviation, minimum and maximum
    pub fn summarize(&self) -> Result<SummaryStatistics, SeriesError> {
        self.ensure_non_empty()?;
        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }

    fn check(readings: &[f64]) -> Result<(), SeriesError> {
        let result = validate(readings);
        #[cfg(feature = "logging")]
        if let Err(err) = &result {
            log::warn!("rejecting {} readings: {}", readings.len(), err);
        }
        result
    }

    fn ensure_non_empty(&self) -> Result<(), SeriesError> {
        if self.readings.is_empty() {
            Err(SeriesError::Empty)
        } else {
            Ok(())
        }
    }

    fn split_first(&self) -> Result<(&f64, &[f64]), SeriesError> {
        self.readings.split_first().ok_or(SeriesError::Empty)
    }

    fn filter(&self, keep: impl Fn(f64) -> bool) -> Vec<f64> {
        self.readings.iter().copied().filter(|&x| keep(x)).collect()
    }
}

impl Series for SeriesStore {
    fn len(&self) -> usize {
        self.readings.len()
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.readings.capacity() * core::mem::size_of::<f64>()
    }
}

impl TryFrom<&[f64]> for SeriesStore {
    type Error = SeriesError;

    fn try_from(readings: &[f64]) -> Result<Self, Self::Error> {
        Self::from_readings(readings)
    }
}

impl TryFrom<Vec<f64>> for SeriesStore {
    type Error = SeriesError;

    fn try_from(readings: Vec<f64>) -> Result<Self, Self::Error> {
        Self::check(&readings)?;
        Ok(Self { readings })
    }
}
