//! Serializable metric results.

use crate::error::EvaluateError;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Result of [`mean_peak_magnitude`](crate::mean_peak_magnitude) for one
/// observed/simulated pair.
///
/// `abs_error` and `rel_error` are `None` when no peak survived the window
/// checks; they serialize as `null`. Non-finite values (a zero-height
/// observed peak makes `rel_error` infinite) serialize as the strings
/// `"inf"`, `"-inf"` or `"nan"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakMagnitude {
    /// Mean absolute difference between observed and matched simulated peaks.
    #[serde(serialize_with = "serialize_error")]
    pub abs_error: Option<f64>,
    /// Mean absolute difference relative to the observed peak.
    #[serde(serialize_with = "serialize_error")]
    pub rel_error: Option<f64>,
    /// Number of peaks that contributed.
    pub peaks: usize,
    /// Peaks where the simulation stayed below the observation.
    #[serde(rename = "sim<obs")]
    pub sim_lower: usize,
    /// Peaks where the simulation overshot the observation.
    #[serde(rename = "sim>obs")]
    pub sim_higher: usize,
}

impl PeakMagnitude {
    /// Flatten into a name → value map keyed and encoded like the JSON
    /// output.
    pub fn to_map(&self) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("abs_error", error_value(self.abs_error)),
            ("rel_error", error_value(self.rel_error)),
            ("peaks", self.peaks.into()),
            ("sim<obs", self.sim_lower.into()),
            ("sim>obs", self.sim_higher.into()),
        ])
    }
}

/// `null` when undefined, a string for non-finite values, a number otherwise.
fn error_value(error: Option<f64>) -> Value {
    match error {
        None => Value::Null,
        Some(x) if x.is_nan() => Value::from("nan"),
        Some(x) if x == f64::INFINITY => Value::from("inf"),
        Some(x) if x == f64::NEG_INFINITY => Value::from("-inf"),
        Some(x) => Value::from(x),
    }
}

fn serialize_error<S: Serializer>(error: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    error_value(*error).serialize(serializer)
}

/// Multi-basin evaluation output.
#[derive(Debug, Serialize)]
pub struct BasinReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// basin -> metric
    pub basins: BTreeMap<String, PeakMagnitude>,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub window: Option<usize>,
    pub resolution: String,
    pub datetime_coord: Option<String>,
    pub n_basins: usize,
}

/// Serialize a basin report to a JSON string.
pub fn to_json(report: &BasinReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
