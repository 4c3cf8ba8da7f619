//! Evaluation error types.

use peakmag_series::SeriesError;
use peakmag_signal::SignalError;

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Observed and simulated series differ in shape.
    #[error("shapes of observations and simulations must match: {observed:?} vs {simulated:?}")]
    ShapeMismatch {
        observed: Vec<usize>,
        simulated: Vec<usize>,
    },

    /// The series carries more than one channel.
    #[error("metric only defined for a single time series (1d, or 2d with second dimension 1), got {shape:?}")]
    Dimensionality { shape: Vec<usize> },

    /// The requested datetime coordinate does not exist.
    #[error("datetime coordinate '{name}' not found")]
    MissingCoord { name: String },

    /// Time-axis helper failure.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Peak detector option failure.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// One or more validation checks failed.
    #[error("{count} validation error(s): {details}")]
    Validation { count: usize, details: String },

    /// Evaluation of a single basin failed.
    #[error("basin '{basin}': {source}")]
    Basin {
        basin: String,
        #[source]
        source: Box<EvaluateError>,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = EvaluateError::ShapeMismatch {
            observed: vec![100],
            simulated: vec![99],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("must match"));
        assert!(msg.contains("[100] vs [99]"));
    }

    #[test]
    fn test_dimensionality_display() {
        let err = EvaluateError::Dimensionality {
            shape: vec![100, 2],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("single time series"));
        assert!(msg.contains("[100, 2]"));
    }

    #[test]
    fn test_series_transparent() {
        let err = EvaluateError::from(SeriesError::NonFixedFrequency {
            input: "1M".to_string(),
        });
        assert_eq!(err.to_string(), "resolution '1M' has no fixed duration");
    }

    #[test]
    fn test_basin_display_and_source() {
        let err = EvaluateError::Basin {
            basin: "01013500".to_string(),
            source: Box::new(EvaluateError::MissingCoord {
                name: "date".to_string(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "basin '01013500': datetime coordinate 'date' not found"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_serialization_display() {
        let err = EvaluateError::Serialization {
            reason: "invalid JSON".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("invalid JSON"));
    }
}
