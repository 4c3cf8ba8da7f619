//! Topographic prominence of peaks.

/// Prominence of a single peak and the bases it was measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prominence {
    /// Peak height minus the higher of the two base levels.
    pub prominence: f64,
    /// Index of the lowest sample on the left before a higher sample.
    pub left_base: usize,
    /// Index of the lowest sample on the right before a higher sample.
    pub right_base: usize,
}

/// Compute the prominence of each peak in `peaks`.
///
/// From each peak the search extends left and right until a sample higher
/// than the peak (or the signal end) is reached, tracking the minimum on each
/// side. The prominence is the peak height minus the larger of those two
/// minima. On ties the base closest to the peak is reported.
///
/// # Panics
///
/// Panics if a peak index is out of bounds for `x`.
pub fn peak_prominences(x: &[f64], peaks: &[usize]) -> Vec<Prominence> {
    peaks.iter().map(|&peak| prominence_of(x, peak)).collect()
}

fn prominence_of(x: &[f64], peak: usize) -> Prominence {
    let height = x[peak];

    let mut left_min = height;
    let mut left_base = peak;
    let mut i = peak;
    loop {
        if x[i] > height {
            break;
        }
        if x[i] < left_min {
            left_min = x[i];
            left_base = i;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let mut right_min = height;
    let mut right_base = peak;
    for (j, &v) in x.iter().enumerate().skip(peak) {
        if v > height {
            break;
        }
        if v < right_min {
            right_min = v;
            right_base = j;
        }
    }

    Prominence {
        prominence: height - left_min.max(right_min),
        left_base,
        right_base,
    }
}
