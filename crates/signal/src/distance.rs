//! Minimum-distance peak selection.

/// Keep only peaks separated by at least `distance` samples.
///
/// Peaks are visited from highest to lowest value of `x`; each visited peak
/// that is still kept removes every neighbour closer than `distance`. Among
/// equal heights the rightmost peak is visited first. `peaks` must be sorted
/// ascending. The returned indices keep that order.
///
/// # Panics
///
/// Panics if a peak index is out of bounds for `x`.
pub fn select_by_distance(peaks: &[usize], x: &[f64], distance: usize) -> Vec<usize> {
    let n = peaks.len();
    let mut keep = vec![true; n];

    // Stable ascending sort; iterated in reverse below.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| x[peaks[a]].total_cmp(&x[peaks[b]]));

    for &j in order.iter().rev() {
        if !keep[j] {
            continue;
        }

        let mut k = j;
        while k > 0 && peaks[j] - peaks[k - 1] < distance {
            k -= 1;
            keep[k] = false;
        }

        let mut k = j + 1;
        while k < n && peaks[k] - peaks[j] < distance {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .iter()
        .zip(keep)
        .filter_map(|(&p, k)| k.then_some(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taller_peak_suppresses_neighbour() {
        let x = [0.0, 1.0, 0.0, 3.0, 0.0, 2.0, 0.0];
        assert_eq!(select_by_distance(&[1, 3, 5], &x, 3), vec![3]);
    }

    #[test]
    fn distance_one_keeps_all() {
        let x = [0.0, 1.0, 0.0, 3.0, 0.0, 2.0, 0.0];
        assert_eq!(select_by_distance(&[1, 3, 5], &x, 1), vec![1, 3, 5]);
    }

    #[test]
    fn exact_distance_is_kept() {
        let x = [0.0, 1.0, 0.0, 2.0, 0.0];
        assert_eq!(select_by_distance(&[1, 3], &x, 2), vec![1, 3]);
    }

    #[test]
    fn suppressed_peak_does_not_suppress() {
        // 1 removes 3; 5 is within reach of 3 but 3 no longer counts.
        let x = [0.0, 5.0, 0.0, 4.0, 0.0, 3.0, 0.0];
        assert_eq!(select_by_distance(&[1, 3, 5], &x, 3), vec![1, 5]);
    }

    #[test]
    fn equal_heights_rightmost_wins() {
        let x = [0.0, 2.0, 0.0, 2.0, 0.0];
        assert_eq!(select_by_distance(&[1, 3], &x, 5), vec![3]);
    }

    #[test]
    fn empty_input() {
        assert!(select_by_distance(&[], &[1.0, 2.0], 10).is_empty());
    }
}
