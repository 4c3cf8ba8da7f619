//! Removal of time steps with a missing value in either series.

use chrono::NaiveDateTime;

/// Gap-free observed/simulated values with their timestamps.
///
/// All vectors are parallel; `positions[i]` is the time step in the
/// original series that filtered index `i` came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidRange {
    pub observed: Vec<f64>,
    pub simulated: Vec<f64>,
    pub times: Vec<NaiveDateTime>,
    pub positions: Vec<usize>,
}

impl ValidRange {
    pub fn len(&self) -> usize {
        self.observed.len()
    }
}

/// Keep only the time steps where both values are present (non-NaN).
///
/// The three inputs are zipped; callers guarantee equal lengths.
pub(crate) fn mask_valid(
    observed: impl IntoIterator<Item = f64>,
    simulated: impl IntoIterator<Item = f64>,
    times: &[NaiveDateTime],
) -> ValidRange {
    let mut range = ValidRange {
        observed: Vec::with_capacity(times.len()),
        simulated: Vec::with_capacity(times.len()),
        times: Vec::with_capacity(times.len()),
        positions: Vec::with_capacity(times.len()),
    };

    for (position, ((obs, sim), &time)) in observed
        .into_iter()
        .zip(simulated)
        .zip(times)
        .enumerate()
    {
        if obs.is_nan() || sim.is_nan() {
            continue;
        }
        range.observed.push(obs);
        range.simulated.push(sim);
        range.times.push(time);
        range.positions.push(position);
    }

    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn days(n: usize) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (0..n).map(|i| start + TimeDelta::days(i as i64)).collect()
    }

    #[test]
    fn test_no_missing_is_identity() {
        let t = days(3);
        let r = mask_valid(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], &t);
        assert_eq!(r.len(), 3);
        assert_eq!(r.observed, vec![1.0, 2.0, 3.0]);
        assert_eq!(r.simulated, vec![4.0, 5.0, 6.0]);
        assert_eq!(r.times, t);
        assert_eq!(r.positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_in_either_series_dropped() {
        let t = days(5);
        let r = mask_valid(
            vec![1.0, f64::NAN, 3.0, 4.0, 5.0],
            vec![1.0, 2.0, 3.0, f64::NAN, 5.0],
            &t,
        );
        assert_eq!(r.observed, vec![1.0, 3.0, 5.0]);
        assert_eq!(r.simulated, vec![1.0, 3.0, 5.0]);
        assert_eq!(r.positions, vec![0, 2, 4]);
        assert_eq!(r.times, vec![t[0], t[2], t[4]]);
    }

    #[test]
    fn test_all_missing() {
        let t = days(2);
        let r = mask_valid(vec![f64::NAN, 1.0], vec![1.0, f64::NAN], &t);
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn test_infinity_is_kept() {
        let t = days(2);
        let r = mask_valid(vec![f64::INFINITY, 1.0], vec![1.0, 2.0], &t);
        assert_eq!(r.len(), 2);
    }
}
