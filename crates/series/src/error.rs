//! Error types for peakmag-series.

/// Error type for all fallible operations in the peakmag-series crate.
///
/// Covers series construction problems, unparsable or unsupported sampling
/// resolutions, and datetime-coordinate lookup failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when one or more construction checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a resolution string cannot be parsed.
    #[error("invalid resolution '{input}': {reason}")]
    InvalidResolution {
        /// The offending resolution string.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Returned for calendar offsets without a fixed duration (months, years).
    #[error("resolution '{input}' has no fixed duration")]
    NonFixedFrequency {
        /// The offending resolution string.
        input: String,
    },

    /// Returned when no coordinate name contains "date".
    #[error("cannot infer datetime coordinate: no candidate among {names:?}")]
    NoDatetimeCoord {
        /// Coordinate names that were inspected.
        names: Vec<String>,
    },

    /// Returned when several coordinate names contain "date".
    #[error("cannot infer datetime coordinate: multiple candidates {candidates:?}")]
    AmbiguousDatetimeCoord {
        /// Every matching coordinate name.
        candidates: Vec<String>,
    },
}
