//! # Tempseries
//!
//! Validated temperature series with descriptive statistics.
//!
//! Tempseries keeps an ordered, growable sequence of readings, rejects
//! anything below absolute zero, and answers aggregate, search and filter
//! queries over the current contents.
//!
//! ## Features
//!
//! - **Validation**: readings below -273.0 are refused, whole batch at a time
//! - **Aggregates**: mean, population standard deviation, minimum, maximum
//! - **Search**: nearest reading to a target, larger value wins on ties
//! - **Filters**: below a threshold, at or above a threshold, within a range
//! - **Snapshots**: sorted copy of the readings, immutable summary statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let mut store = SeriesStore::from_readings(&[1.0, -0.5, 0.5]).unwrap();
//! store.add_readings(&[3.0]).unwrap();
//!
//! assert_eq!(store.find_closest_to_zero(), Ok(0.5));
//! assert_eq!(store.find_in_range(0.0, 1.0), vec![1.0, 0.5]);
//!
//! let summary = store.summarize().unwrap();
//! println!("{}", summary);
//! ```
//!
//! ## Errors
//!
//! Fallible operations return [`SeriesError`]:
//!
//! ```rust
//! use tempseries::{SeriesError, SeriesStore};
//!
//! assert!(SeriesStore::from_readings(&[-300.0]).is_err());
//! assert_eq!(SeriesStore::new().average(), Err(SeriesError::Empty));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialize summary statistics
//! - `logging`: Emit `log` records on rejection, growth and reset

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod traits;

mod math;

pub mod series;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::series::{SeriesStore, SummaryStatistics};
}

pub use series::{SeriesStore, SummaryStatistics};
pub use traits::{SeriesError, ABSOLUTE_ZERO};
