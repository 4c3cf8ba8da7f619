//! Timestamped series container.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::error::SeriesError;
use crate::validate;

/// A time series with one or more named datetime coordinates.
///
/// Values are stored row-major with an explicit shape: `[n]` for a single
/// series or `[n, k]` for `k` channels sharing the time axis. Missing
/// readings are NaN. Every coordinate holds one timestamp per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Flat value buffer, `n * k` entries.
    values: Vec<f64>,
    /// `[n]` or `[n, k]`.
    shape: Vec<usize>,
    /// Coordinate name -> timestamps.
    coords: BTreeMap<String, Vec<NaiveDateTime>>,
}

impl TimeSeries {
    /// Creates a one-dimensional series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Validation`] if `times` and `values` differ in
    /// length or the coordinate name is empty.
    pub fn new(
        coord: impl Into<String>,
        times: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let n = times.len();
        Self::build(coord.into(), times, values, vec![n])
    }

    /// Creates a two-dimensional series of shape `[times.len(), n_channels]`.
    ///
    /// A single channel still yields a two-dimensional shape `[n, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Validation`] if `n_channels` is zero, if
    /// `values.len() != times.len() * n_channels`, or the coordinate name is
    /// empty.
    pub fn with_channels(
        coord: impl Into<String>,
        times: Vec<NaiveDateTime>,
        values: Vec<f64>,
        n_channels: usize,
    ) -> Result<Self, SeriesError> {
        let n = times.len();
        Self::build(coord.into(), times, values, vec![n, n_channels])
    }

    fn build(
        coord: String,
        times: Vec<NaiveDateTime>,
        values: Vec<f64>,
        shape: Vec<usize>,
    ) -> Result<Self, SeriesError> {
        let n_times = shape[0];
        let n_channels = shape.get(1).copied().unwrap_or(1);

        let mut c = validate::validate_layout(values.len(), n_times, n_channels);
        if coord.is_empty() {
            c.push("coordinate name must not be empty");
        }
        c.finish()?;

        let mut coords = BTreeMap::new();
        coords.insert(coord, times);
        Ok(Self {
            values,
            shape,
            coords,
        })
    }

    /// Attaches an additional coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Validation`] if the name is empty or already
    /// used, or the length does not match the number of time steps.
    pub fn with_coord(
        mut self,
        name: impl Into<String>,
        times: Vec<NaiveDateTime>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        validate::validate_coord(&name, times.len(), self.len(), self.coords.keys()).finish()?;
        self.coords.insert(name, times);
        Ok(self)
    }

    /// Returns the shape, `[n]` or `[n, k]`.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of channels (1 for a one-dimensional series).
    pub fn n_channels(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(1)
    }

    /// Returns the number of time steps.
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Returns `true` if the series has no time steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first-channel value at time step `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn value(&self, i: usize) -> f64 {
        self.values[i * self.n_channels()]
    }

    /// Iterates over the first channel in time order.
    pub fn first_channel(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().step_by(self.n_channels()).copied()
    }

    /// Returns the timestamps of coordinate `name`, if present.
    pub fn coord(&self, name: &str) -> Option<&[NaiveDateTime]> {
        self.coords.get(name).map(Vec::as_slice)
    }

    /// Iterates over coordinate names in sorted order.
    pub fn coord_names(&self) -> impl Iterator<Item = &str> {
        self.coords.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn days(n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2001, 10, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n)
            .map(|i| start + TimeDelta::days(i as i64))
            .collect()
    }

    #[test]
    fn one_dimensional() {
        let ts = TimeSeries::new("date", days(3), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.shape(), &[3]);
        assert_eq!(ts.ndim(), 1);
        assert_eq!(ts.n_channels(), 1);
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.value(2), 3.0);
        assert_eq!(ts.coord("date").unwrap().len(), 3);
        assert!(ts.coord("time").is_none());
    }

    #[test]
    fn singleton_channel_keeps_two_dimensions() {
        let ts = TimeSeries::with_channels("date", days(3), vec![1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(ts.shape(), &[3, 1]);
        assert_eq!(ts.ndim(), 2);
        assert_eq!(ts.first_channel().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn multi_channel_first_channel() {
        let ts = TimeSeries::with_channels(
            "date",
            days(3),
            vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0],
            2,
        )
        .unwrap();
        assert_eq!(ts.shape(), &[3, 2]);
        assert_eq!(ts.value(1), 2.0);
        assert_eq!(ts.first_channel().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn length_mismatch_fails() {
        let err = TimeSeries::new("date", days(3), vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, SeriesError::Validation { count: 1, .. }));
    }

    #[test]
    fn zero_channels_fails() {
        assert!(TimeSeries::with_channels("date", days(0), vec![], 0).is_err());
    }

    #[test]
    fn huge_channel_count_fails() {
        let err = TimeSeries::with_channels("date", days(2), vec![1.0; 4], usize::MAX).unwrap_err();
        assert!(matches!(err, SeriesError::Validation { count: 1, .. }));
    }

    #[test]
    fn empty_coord_name_fails() {
        let err = TimeSeries::new("", days(2), vec![1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("coordinate name must not be empty"));
    }

    #[test]
    fn empty_series_is_valid() {
        let ts = TimeSeries::new("date", Vec::new(), Vec::new()).unwrap();
        assert!(ts.is_empty());
    }

    #[test]
    fn additional_coords() {
        let ts = TimeSeries::new("date", days(2), vec![1.0, 2.0])
            .unwrap()
            .with_coord("issue_time", days(2))
            .unwrap();
        assert_eq!(ts.coord_names().collect::<Vec<_>>(), vec!["date", "issue_time"]);
    }

    #[test]
    fn duplicate_coord_fails() {
        let err = TimeSeries::new("date", days(2), vec![1.0, 2.0])
            .unwrap()
            .with_coord("date", days(3))
            .unwrap_err();
        assert!(matches!(err, SeriesError::Validation { count: 2, .. }));
    }
}
