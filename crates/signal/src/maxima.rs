//! Local maxima detection.

/// Find all local maxima in `x`.
///
/// A maximum is any sample (or flat run of equal samples) strictly greater
/// than both of its neighbours. For a flat top the reported index is the
/// midpoint of the run, rounded down. The first and last samples are never
/// maxima, and a flat run touching either end is ignored.
pub fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let i_max = x.len() - 1;
    let mut i = 1;
    while i < i_max {
        if x[i - 1] < x[i] {
            let mut i_ahead = i + 1;
            while i_ahead < i_max && x[i_ahead] == x[i] {
                i_ahead += 1;
            }
            if x[i_ahead] < x[i] {
                peaks.push((i + i_ahead - 1) / 2);
                i = i_ahead;
            }
        }
        i += 1;
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spike() {
        assert_eq!(local_maxima(&[0.0, 1.0, 0.0]), vec![1]);
    }

    #[test]
    fn too_short() {
        assert!(local_maxima(&[]).is_empty());
        assert!(local_maxima(&[1.0, 2.0]).is_empty());
    }

    #[test]
    fn endpoints_excluded() {
        assert!(local_maxima(&[3.0, 2.0, 1.0]).is_empty());
        assert!(local_maxima(&[1.0, 2.0, 3.0]).is_empty());
    }

    #[test]
    fn odd_plateau_midpoint() {
        assert_eq!(local_maxima(&[0.0, 2.0, 2.0, 2.0, 0.0]), vec![2]);
    }

    #[test]
    fn even_plateau_rounds_down() {
        assert_eq!(local_maxima(&[0.0, 2.0, 2.0, 0.0]), vec![1]);
    }

    #[test]
    fn plateau_touching_end_ignored() {
        assert!(local_maxima(&[0.0, 1.0, 1.0]).is_empty());
    }

    #[test]
    fn step_is_not_a_peak() {
        assert_eq!(local_maxima(&[0.0, 1.0, 1.0, 2.0, 0.0]), vec![3]);
    }

    #[test]
    fn multiple_maxima() {
        let x = [0.0, 1.0, 0.0, 2.0, 0.0, 1.5, 1.0];
        assert_eq!(local_maxima(&x), vec![1, 3, 5]);
    }
}
