//! Temperature reading series and their summaries
//!
//! This module provides a validated in-memory store of readings with
//! descriptive-statistics queries over it.
//!
//! # Example
//!
//! ```
//! use tempseries::series::SeriesStore;
//!
//! let mut store = SeriesStore::new();
//! store.add_readings(&[21.5, 19.0, 23.25]).unwrap();
//!
//! println!("Mean: {}", store.average().unwrap());
//! println!("Stddev: {}", store.deviation().unwrap());
//! println!("Closest to 20: {}", store.find_closest_to_value(20.0).unwrap());
//! println!("Sorted: {:?}", store.sorted_snapshot());
//! ```

mod store;
mod summary;

pub use store::SeriesStore;
pub use summary::SummaryStatistics;
