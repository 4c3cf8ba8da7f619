//! # peakmag-series
//!
//! Timestamped series and the time-axis helpers the peak-magnitude metric
//! relies on.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use peakmag_series::{Resolution, TimeSeries, frequency_factor, infer_datetime_coord};
//!
//! let start = NaiveDate::from_ymd_opt(2000, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let times: Vec<_> = (0..5).map(|i| start + TimeDelta::days(i)).collect();
//! let ts = TimeSeries::new("date", times.clone(), vec![0.0, 1.0, 4.0, 1.0, 0.0]).unwrap();
//!
//! assert_eq!(infer_datetime_coord(&ts).unwrap(), "date");
//! assert_eq!(Resolution::daily().steps_between(times[0], times[4]), 5);
//! assert_eq!(frequency_factor("12H", "1H").unwrap(), 12.0);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | [`TimeSeries`] container with named coordinates |
//! | `resolution` | Fixed-duration sampling interval and frequency factors |
//! | `coord` | Datetime-coordinate inference |
//! | `validate` | Accumulated construction checks |
//! | `error` | Error types |

mod coord;
mod error;
mod resolution;
mod series;
mod validate;

pub use coord::infer_datetime_coord;
pub use error::SeriesError;
pub use resolution::{Resolution, ResolutionUnit, frequency_factor};
pub use series::TimeSeries;
