//! # peakmag-signal
//!
//! Peak detection on a one-dimensional signal with the semantics of
//! `scipy.signal.find_peaks`, restricted to the `distance` and `prominence`
//! criteria.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["&[f64]"] -->|"local_maxima()"| B["plateau midpoints"]
//!     B -->|"select_by_distance()"| C["spaced maxima"]
//!     C -->|"peak_prominences()"| D["Prominence per peak"]
//!     D -->|"threshold"| E["Vec of Peak"]
//! ```
//!
//! Distance selection runs before the prominence threshold, so a tall but
//! barely prominent maximum can still suppress a lower neighbour that would
//! otherwise have qualified.
//!
//! ## Quick Start
//!
//! ```
//! use peakmag_signal::{FindPeaksOptions, find_peaks};
//!
//! let x = [0.0, 1.0, 0.0, 3.0, 0.0, 2.0, 0.0];
//! let options = FindPeaksOptions::new().with_distance(3);
//! let peaks = find_peaks(&x, &options).unwrap();
//! let indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
//! assert_eq!(indices, vec![3]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `maxima` | Local maxima with flat-top handling |
//! | `distance` | Minimum-separation selection by height priority |
//! | `prominence` | Topographic prominence and bases |
//! | `find` | Combined detector and options |
//! | `error` | Error types |

mod distance;
mod error;
mod find;
mod maxima;
mod prominence;

pub use distance::select_by_distance;
pub use error::SignalError;
pub use find::{FindPeaksOptions, Peak, find_peaks};
pub use maxima::local_maxima;
pub use prominence::{Prominence, peak_prominences};
