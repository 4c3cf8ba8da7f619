//! # peakmag-evaluate
//!
//! Mean peak-magnitude error between an observed and a simulated
//! hydrological series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["TimeSeries pair"] -->|"validate"| B["single channel"]
//!     B -->|"mask"| C["gap-free values + times"]
//!     C -->|"find_peaks()"| D["observed peaks"]
//!     D -->|"window checks"| E["matched simulated peaks"]
//!     E -->|"aggregate"| F["PeakMagnitude"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `magnitude` | The metric itself |
//! | `config` | [`PeakMagnitudeConfig`] builder and TOML section |
//! | `validate` | Shape and dimensionality checks |
//! | `mask` | Removal of missing time steps |
//! | `output` | [`PeakMagnitude`] and multi-basin JSON report |
//! | `error` | Error types |

mod config;
mod error;
mod magnitude;
mod mask;
mod output;
mod validate;

use peakmag_series::TimeSeries;
use std::collections::BTreeMap;
use tracing::debug;

pub use config::PeakMagnitudeConfig;
pub use error::EvaluateError;
pub use magnitude::mean_peak_magnitude;
pub use output::{BasinReport, ConfigSummary, PeakMagnitude, to_json};

/// Evaluate the metric for several basins with one configuration.
///
/// Each entry maps a basin name to its `(observed, simulated)` pair.
///
/// # Errors
///
/// Returns [`EvaluateError::Validation`] if `basins` is empty, and
/// [`EvaluateError::Basin`] wrapping the first per-basin failure.
#[tracing::instrument(skip_all, fields(n_basins = basins.len()))]
pub fn evaluate_basins(
    basins: &BTreeMap<String, (TimeSeries, TimeSeries)>,
    config: &PeakMagnitudeConfig,
) -> Result<BasinReport, EvaluateError> {
    if basins.is_empty() {
        return Err(EvaluateError::Validation {
            count: 1,
            details: "no basins provided".to_string(),
        });
    }

    let mut results = BTreeMap::new();
    for (basin, (observed, simulated)) in basins {
        let metric = mean_peak_magnitude(observed, simulated, config).map_err(|e| {
            EvaluateError::Basin {
                basin: basin.clone(),
                source: Box::new(e),
            }
        })?;
        debug!(basin = %basin, peaks = metric.peaks, "basin evaluated");
        results.insert(basin.clone(), metric);
    }

    Ok(BasinReport {
        config: ConfigSummary {
            window: config.window(),
            resolution: config.resolution().to_string(),
            datetime_coord: config.datetime_coord().map(str::to_string),
            n_basins: results.len(),
        },
        basins: results,
    })
}
