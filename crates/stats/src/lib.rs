//! Statistical helper functions for peak-magnitude evaluation.

/// Mean of absolute values. Returns `None` if empty.
///
/// Non-finite entries propagate into the result.
pub fn mean_abs(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().map(|x| x.abs()).sum::<f64>() / data.len() as f64)
}

/// Population variance with N denominator (matching numpy's `var()` default).
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let nf = data.len() as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf
}

/// Population standard deviation with N denominator (matching numpy's `std()`).
/// Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Index of the largest value, first occurrence on ties.
///
/// NaN entries are never selected unless every entry is NaN, in which case
/// index 0 is returned. Returns `None` if empty.
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in data.iter().enumerate() {
        match best {
            None if !v.is_nan() => best = Some(i),
            Some(b) if v > data[b] => best = Some(i),
            _ => {}
        }
    }
    if best.is_none() && !data.is_empty() {
        return Some(0);
    }
    best
}
