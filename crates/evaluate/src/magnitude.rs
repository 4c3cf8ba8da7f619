//! Mean peak-magnitude error between observed and simulated series.

use peakmag_series::{Resolution, TimeSeries, frequency_factor, infer_datetime_coord};
use peakmag_signal::{FindPeaksOptions, find_peaks};
use peakmag_stats::{argmax, mean_abs, population_sd};
use tracing::{debug, trace};

use crate::config::PeakMagnitudeConfig;
use crate::error::EvaluateError;
use crate::mask::{ValidRange, mask_valid};
use crate::output::PeakMagnitude;
use crate::validate::validate_inputs;

/// Minimum separation, in samples, between detected observed peaks.
const PEAK_DISTANCE: usize = 100;

/// Time span the default window should cover on each side of a peak.
const DEFAULT_WINDOW_SPAN: &str = "12H";

/// Lower bound for the default window.
const MIN_DEFAULT_WINDOW: usize = 3;

/// Compare the magnitude of observed peaks with the simulation around them.
///
/// Time steps where either series is missing are dropped first; all indices
/// below refer to the remaining gap-free sequence. Observed peaks are found
/// with a minimum separation of 100 samples and a minimum prominence of one
/// (population) standard deviation of the observed values. For each peak the
/// simulated value at the same index is used when it is a strict local
/// maximum, otherwise the largest simulated value within `window` samples on
/// either side.
///
/// Peaks are skipped when the window leaves the series, or when the window's
/// first and last timestamps are not exactly `2 * window` steps of
/// `resolution` apart (a removed gap lies inside it).
///
/// With no datetime coordinate configured, the single coordinate whose name
/// contains `"date"` is used. With no window configured, the window covers
/// 12 hours at the configured resolution, but at least 3 samples.
///
/// # Errors
///
/// Returns [`EvaluateError::ShapeMismatch`] if the shapes differ,
/// [`EvaluateError::Dimensionality`] for multi-channel input,
/// [`EvaluateError::MissingCoord`] if the configured coordinate does not
/// exist, and [`EvaluateError::Series`] if coordinate inference fails.
#[tracing::instrument(skip_all, fields(n = observed.len()))]
pub fn mean_peak_magnitude(
    observed: &TimeSeries,
    simulated: &TimeSeries,
    config: &PeakMagnitudeConfig,
) -> Result<PeakMagnitude, EvaluateError> {
    validate_inputs(observed, simulated)?;

    let coord = match config.datetime_coord() {
        Some(name) => name,
        None => infer_datetime_coord(observed)?,
    };
    let times = observed
        .coord(coord)
        .ok_or_else(|| EvaluateError::MissingCoord {
            name: coord.to_string(),
        })?;

    let range = mask_valid(observed.first_channel(), simulated.first_channel(), times);

    let candidates = detect_peaks(&range.observed)?;

    let resolution = config.resolution();
    let window = match config.window() {
        Some(w) => w,
        None => default_window(&resolution)?,
    };

    debug!(
        n_valid = range.len(),
        n_candidates = candidates.len(),
        window,
        %resolution,
        "matching peaks"
    );

    let mut abs_errors = Vec::with_capacity(candidates.len());
    let mut rel_errors = Vec::with_capacity(candidates.len());
    for idx in candidates {
        if !window_is_valid(&range, idx, window, &resolution) {
            continue;
        }

        let peak_sim = simulated_peak(&range.simulated, idx, window);
        let peak_obs = range.observed[idx];

        let abs_diff = peak_obs - peak_sim;
        let rel_diff = abs_diff / peak_obs;

        abs_errors.push(abs_diff);
        rel_errors.push(rel_diff);
    }

    Ok(aggregate(&abs_errors, &rel_errors))
}

/// Indices of significant peaks in the gap-free observed values.
fn detect_peaks(observed: &[f64]) -> Result<Vec<usize>, EvaluateError> {
    let threshold = population_sd(observed);
    // A NaN threshold (infinite observations) admits no peak.
    if threshold.is_nan() {
        return Ok(Vec::new());
    }
    let options = FindPeaksOptions::new()
        .with_distance(PEAK_DISTANCE)
        .with_prominence(threshold);
    Ok(find_peaks(observed, &options)?
        .into_iter()
        .map(|p| p.index)
        .collect())
}

/// Window half-width covering 12 hours at `resolution`, at least 3.
fn default_window(resolution: &Resolution) -> Result<usize, EvaluateError> {
    let factor = frequency_factor(DEFAULT_WINDOW_SPAN, &resolution.to_string())?;
    Ok((factor as usize).max(MIN_DEFAULT_WINDOW))
}

/// Whether the window around `idx` lies inside the series and spans exactly
/// `2 * window + 1` regular time steps.
fn window_is_valid(range: &ValidRange, idx: usize, window: usize, resolution: &Resolution) -> bool {
    if idx < window || idx + window >= range.len() {
        trace!(
            idx,
            position = range.positions[idx],
            "skipping peak: window exceeds series bounds"
        );
        return false;
    }

    let steps = resolution.steps_between(range.times[idx - window], range.times[idx + window]);
    if steps != 2 * window + 1 {
        trace!(
            idx,
            position = range.positions[idx],
            steps,
            "skipping peak: window spans a gap"
        );
        return false;
    }

    true
}

/// Simulated peak value matched to the observed peak at `idx`.
///
/// `idx` must have a neighbour on both sides.
fn simulated_peak(simulated: &[f64], idx: usize, window: usize) -> f64 {
    if simulated[idx] > simulated[idx - 1] && simulated[idx] > simulated[idx + 1] {
        return simulated[idx];
    }
    let values = &simulated[idx - window..=idx + window];
    argmax(values).map_or(simulated[idx], |i| values[i])
}

/// Summarise the per-peak differences.
///
/// Each statistic is undefined when its own collection is empty.
fn aggregate(abs_errors: &[f64], rel_errors: &[f64]) -> PeakMagnitude {
    PeakMagnitude {
        abs_error: mean_abs(abs_errors),
        rel_error: mean_abs(rel_errors),
        peaks: abs_errors.len(),
        sim_lower: abs_errors.iter().filter(|&&d| d > 0.0).count(),
        sim_higher: abs_errors.iter().filter(|&&d| d < 0.0).count(),
    }
}
