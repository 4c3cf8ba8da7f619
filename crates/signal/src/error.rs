//! Error types for the peakmag-signal crate.

/// Error type for invalid peak-detection options.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    /// Returned when the minimum peak distance is zero.
    #[error("distance must be >= 1, got {distance}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
    },

    /// Returned when the minimum prominence is NaN.
    #[error("prominence threshold must not be NaN")]
    NanProminence,
}
