//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple construction
//! errors into a single [`SeriesError::Validation`], plus helpers that check
//! the layout invariants of a [`TimeSeries`](crate::TimeSeries).

use crate::error::SeriesError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`SeriesError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(SeriesError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), SeriesError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SeriesError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Layout checks
// ---------------------------------------------------------------------------

/// Check that a flat value buffer matches `n_times` rows of `n_channels`.
pub(crate) fn validate_layout(
    n_values: usize,
    n_times: usize,
    n_channels: usize,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if n_channels == 0 {
        c.push("channel count must be >= 1");
    } else {
        match n_times.checked_mul(n_channels) {
            Some(expected) if expected == n_values => {}
            Some(_) => c.push(format!(
                "values length {n_values} != {n_times} time steps x {n_channels} channel(s)"
            )),
            None => c.push(format!(
                "{n_times} time steps x {n_channels} channel(s) overflows"
            )),
        }
    }

    c
}

/// Check a coordinate about to be attached to a series of `n_times` steps.
pub(crate) fn validate_coord<'a>(
    name: &str,
    coord_len: usize,
    n_times: usize,
    existing: impl IntoIterator<Item = &'a String>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if name.is_empty() {
        c.push("coordinate name must not be empty");
    }
    if existing.into_iter().any(|n| n == name) {
        c.push(format!("duplicate coordinate '{name}'"));
    }
    if coord_len != n_times {
        c.push(format!(
            "coordinate '{name}' length {coord_len} != {n_times} time steps"
        ));
    }

    c
}
