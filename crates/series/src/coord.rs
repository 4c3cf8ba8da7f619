//! Datetime-coordinate inference.

use crate::error::SeriesError;
use crate::series::TimeSeries;

/// Name of the single coordinate of `series` whose name contains `"date"`.
///
/// # Errors
///
/// Returns [`SeriesError::NoDatetimeCoord`] when no name matches and
/// [`SeriesError::AmbiguousDatetimeCoord`] when more than one does.
pub fn infer_datetime_coord(series: &TimeSeries) -> Result<&str, SeriesError> {
    let candidates: Vec<&str> = series
        .coord_names()
        .filter(|name| name.contains("date"))
        .collect();

    match candidates.as_slice() {
        [name] => Ok(*name),
        [] => Err(SeriesError::NoDatetimeCoord {
            names: series.coord_names().map(str::to_string).collect(),
        }),
        _ => Err(SeriesError::AmbiguousDatetimeCoord {
            candidates: candidates.iter().map(|s| s.to_string()).collect(),
        }),
    }
}
