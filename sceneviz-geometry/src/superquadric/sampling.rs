//! Arc-length parametrization of curves on the surface

use nalgebra::Vector3;

/// Lengths shorter than this are treated as a collapsed curve
pub const MIN_CURVE_LENGTH: f64 = 1e-12;

/// Segments shorter than this interpolate to their start parameter
const MIN_SEGMENT_LENGTH: f64 = 1e-15;

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Running length of the polyline through `points`, starting at zero
pub fn cumulative_lengths(points: &[Vector3<f64>]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += (point - points[i - 1]).norm();
        }
        lengths.push(total);
    }
    lengths
}

/// Pick `n_out` parameters whose cumulative lengths are evenly spaced.
///
/// `cumulative` holds the length reached at each entry of `params`. The first
/// and last parameters are kept exactly; interior targets are found by linear
/// interpolation within the bracketing segment. Returns `None` when the total
/// length is too small to invert.
pub fn invert_cumulative(params: &[f64], cumulative: &[f64], n_out: usize) -> Option<Vec<f64>> {
    debug_assert_eq!(params.len(), cumulative.len());
    let n = params.len();
    if n < 2 || n_out < 2 {
        return None;
    }
    let total = cumulative[n - 1];
    if total < MIN_CURVE_LENGTH {
        return None;
    }

    let mut result = vec![0.0; n_out];
    result[0] = params[0];
    result[n_out - 1] = params[n - 1];

    let mut segment = 0;
    for (i, slot) in result.iter_mut().enumerate().take(n_out - 1).skip(1) {
        let target = total * i as f64 / (n_out - 1) as f64;
        while segment < n - 2 && cumulative[segment + 1] < target {
            segment += 1;
        }
        let length = cumulative[segment + 1] - cumulative[segment];
        let fraction = if length > MIN_SEGMENT_LENGTH {
            (target - cumulative[segment]) / length
        } else {
            0.0
        };
        *slot = params[segment] + fraction * (params[segment + 1] - params[segment]);
    }
    Some(result)
}

/// Sample `n_out` parameters in `[start, end]` that are equally spaced by arc length along `curve`.
///
/// The curve is tabulated at `dense` uniform parameters first. A curve of zero
/// length falls back to uniform parameter spacing.
pub fn arc_length_sample<F>(start: f64, end: f64, n_out: usize, dense: usize, curve: F) -> Vec<f64>
where
    F: Fn(f64) -> Vector3<f64>,
{
    let params = linspace(start, end, dense);
    let points: Vec<Vector3<f64>> = params.iter().map(|&t| curve(t)).collect();
    let cumulative = cumulative_lengths(&points);
    invert_cumulative(&params, &cumulative, n_out).unwrap_or_else(|| linspace(start, end, n_out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_cumulative_lengths() {
        let points = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(3.0, 4.0, 1.0),
        ];
        assert_eq!(cumulative_lengths(&points), vec![0.0, 5.0, 6.0]);
    }

    #[test]
    fn test_straight_line_is_uniform() {
        let samples = arc_length_sample(0.0, 1.0, 5, 100, |t| Vector3::new(2.0 * t, 0.0, 0.0));
        for (sample, expected) in samples.iter().zip(linspace(0.0, 1.0, 5)) {
            assert_relative_eq!(*sample, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quadratic_curve_is_equalized() {
        // x = t^2 has arc length t^2 on [0, 1], so equal lengths need t = sqrt(i / 4)
        let samples = arc_length_sample(0.0, 1.0, 5, 2000, |t| Vector3::new(t * t, 0.0, 0.0));
        for (i, sample) in samples.iter().enumerate() {
            assert_relative_eq!(*sample, (i as f64 / 4.0).sqrt(), epsilon = 1e-3);
        }
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[4], 1.0);
    }

    #[test]
    fn test_collapsed_curve_falls_back_to_uniform() {
        let samples = arc_length_sample(-1.0, 1.0, 3, 50, |_| Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(samples, vec![-1.0, 0.0, 1.0]);
        assert!(invert_cumulative(&[0.0, 1.0], &[0.0, 0.0], 3).is_none());
    }
}
