//! Shape checks run before any computation.

use peakmag_series::TimeSeries;

use crate::error::EvaluateError;

/// Check that both series have the same shape and a single channel.
///
/// A `[n, 1]` series is accepted; `[n]` and `[n, 1]` still count as
/// different shapes.
pub(crate) fn validate_inputs(
    observed: &TimeSeries,
    simulated: &TimeSeries,
) -> Result<(), EvaluateError> {
    if observed.shape() != simulated.shape() {
        return Err(EvaluateError::ShapeMismatch {
            observed: observed.shape().to_vec(),
            simulated: simulated.shape().to_vec(),
        });
    }

    if observed.ndim() > 1 && observed.shape()[1] > 1 {
        return Err(EvaluateError::Dimensionality {
            shape: observed.shape().to_vec(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn days(n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n).map(|i| start + TimeDelta::days(i as i64)).collect()
    }

    fn series(n: usize) -> TimeSeries {
        TimeSeries::new("date", days(n), vec![0.0; n]).unwrap()
    }

    #[test]
    fn test_equal_shapes_pass() {
        assert!(validate_inputs(&series(10), &series(10)).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let err = validate_inputs(&series(100), &series(99)).unwrap_err();
        match err {
            EvaluateError::ShapeMismatch {
                observed,
                simulated,
            } => {
                assert_eq!(observed, vec![100]);
                assert_eq!(simulated, vec![99]);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_singleton_channel_vs_flat_mismatch() {
        let flat = series(5);
        let column = TimeSeries::with_channels("date", days(5), vec![0.0; 5], 1).unwrap();
        assert!(matches!(
            validate_inputs(&flat, &column),
            Err(EvaluateError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_singleton_channel_passes() {
        let a = TimeSeries::with_channels("date", days(5), vec![0.0; 5], 1).unwrap();
        let b = a.clone();
        assert!(validate_inputs(&a, &b).is_ok());
    }

    #[test]
    fn test_multi_channel_rejected() {
        let a = TimeSeries::with_channels("date", days(100), vec![0.0; 200], 2).unwrap();
        let b = a.clone();
        match validate_inputs(&a, &b).unwrap_err() {
            EvaluateError::Dimensionality { shape } => assert_eq!(shape, vec![100, 2]),
            other => panic!("expected Dimensionality, got {other:?}"),
        }
    }
}
