//! Evaluation configuration.

use peakmag_series::Resolution;
use serde::Deserialize;

/// Configuration for the peak-magnitude metric.
///
/// Every field is optional when deserialized, so the struct can be embedded
/// in a host TOML file as e.g.
///
/// ```toml
/// [peak_magnitude]
/// window = 5
/// resolution = "1H"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PeakMagnitudeConfig {
    window: Option<usize>,
    resolution: Resolution,
    datetime_coord: Option<String>,
}

impl PeakMagnitudeConfig {
    /// Set the matching window half-width in samples.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the sampling resolution of the series.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the datetime coordinate name instead of inferring it.
    pub fn with_datetime_coord(mut self, name: impl Into<String>) -> Self {
        self.datetime_coord = Some(name.into());
        self
    }

    /// Returns the window half-width, if set.
    pub fn window(&self) -> Option<usize> {
        self.window
    }

    /// Returns the sampling resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the datetime coordinate name, if set.
    pub fn datetime_coord(&self) -> Option<&str> {
        self.datetime_coord.as_deref()
    }
}
