//! Combined peak detector.

use tracing::debug;

use crate::distance::select_by_distance;
use crate::error::SignalError;
use crate::maxima::local_maxima;
use crate::prominence::peak_prominences;

/// Options for [`find_peaks`].
///
/// Unset criteria are not applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FindPeaksOptions {
    distance: Option<usize>,
    prominence: Option<f64>,
}

impl FindPeaksOptions {
    /// Options with no selection criteria: every local maximum is a peak.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `distance` samples between retained peaks.
    pub fn with_distance(mut self, distance: usize) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Require a prominence of at least `prominence`.
    pub fn with_prominence(mut self, prominence: f64) -> Self {
        self.prominence = Some(prominence);
        self
    }

    /// Returns the minimum peak distance, if set.
    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    /// Returns the minimum prominence, if set.
    pub fn prominence(&self) -> Option<f64> {
        self.prominence
    }

    /// Validates these options.
    ///
    /// Returns an error if the distance is zero or the prominence is NaN.
    pub fn validate(&self) -> Result<(), SignalError> {
        if let Some(distance) = self.distance
            && distance == 0
        {
            return Err(SignalError::InvalidDistance { distance });
        }
        if self.prominence.is_some_and(f64::is_nan) {
            return Err(SignalError::NanProminence);
        }
        Ok(())
    }
}

/// A detected peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index of the peak.
    pub index: usize,
    /// Signal value at the peak.
    pub height: f64,
    /// Topographic prominence.
    pub prominence: f64,
    /// Left base used for the prominence.
    pub left_base: usize,
    /// Right base used for the prominence.
    pub right_base: usize,
}

/// Find peaks in `x`, in ascending index order.
///
/// Local maxima are thinned by distance first and then filtered by
/// prominence. The input must not contain NaN; callers strip missing values
/// beforehand.
///
/// # Errors
///
/// Returns the [`FindPeaksOptions::validate`] error for invalid options.
pub fn find_peaks(x: &[f64], options: &FindPeaksOptions) -> Result<Vec<Peak>, SignalError> {
    options.validate()?;

    let maxima = local_maxima(x);
    let n_maxima = maxima.len();

    let spaced = match options.distance {
        Some(distance) => select_by_distance(&maxima, x, distance),
        None => maxima,
    };
    let n_spaced = spaced.len();

    let min_prominence = options.prominence.unwrap_or(f64::NEG_INFINITY);
    let peaks: Vec<Peak> = spaced
        .iter()
        .zip(peak_prominences(x, &spaced))
        .filter(|(_, p)| p.prominence >= min_prominence)
        .map(|(&index, p)| Peak {
            index,
            height: x[index],
            prominence: p.prominence,
            left_base: p.left_base,
            right_base: p.right_base,
        })
        .collect();

    debug!(
        n_maxima,
        n_spaced,
        n_peaks = peaks.len(),
        "peak detection finished"
    );

    Ok(peaks)
}
