//! Grid relaxation: redistribute parameters so edges on the surface have similar lengths

use super::sampling::{cumulative_lengths, invert_cumulative};
use super::surface::SuperquadricSurface;
use super::ParameterGrid;
use nalgebra::Vector3;

/// Average the cumulative lengths of several polylines sampled at the same parameters
pub fn averaged_cumulative<I>(curves: I, len: usize) -> Vec<f64>
where
    I: IntoIterator<Item = Vec<Vector3<f64>>>,
{
    let mut sum = vec![0.0; len];
    let mut count = 0usize;
    for curve in curves {
        for (acc, length) in sum.iter_mut().zip(cumulative_lengths(&curve)) {
            *acc += length;
        }
        count += 1;
    }
    if count > 0 {
        for acc in &mut sum {
            *acc /= count as f64;
        }
    }
    sum
}

/// New u parameters from chord lengths averaged over every v row
pub fn relax_u(surface: &SuperquadricSurface, u: &[f64], v: &[f64]) -> Vec<f64> {
    let rows = v
        .iter()
        .map(|&vj| u.iter().map(|&ui| surface.point(ui, vj)).collect::<Vec<_>>());
    let cumulative = averaged_cumulative(rows, u.len());
    invert_cumulative(u, &cumulative, u.len()).unwrap_or_else(|| u.to_vec())
}

/// New v parameters from chord lengths averaged over every u column
pub fn relax_v(surface: &SuperquadricSurface, u: &[f64], v: &[f64]) -> Vec<f64> {
    let columns = u
        .iter()
        .map(|&ui| v.iter().map(|&vj| surface.point(ui, vj)).collect::<Vec<_>>());
    let cumulative = averaged_cumulative(columns, v.len());
    invert_cumulative(v, &cumulative, v.len()).unwrap_or_else(|| v.to_vec())
}

/// One relaxation pass; the v update sees the already relaxed u
pub fn relax_grid(surface: &SuperquadricSurface, grid: &ParameterGrid) -> ParameterGrid {
    let u = relax_u(surface, &grid.u, &grid.v);
    let v = relax_v(surface, &u, &grid.v);
    ParameterGrid { u, v }
}

pub fn relax_iterations(surface: &SuperquadricSurface, grid: ParameterGrid, iterations: usize) -> ParameterGrid {
    (0..iterations).fold(grid, |grid, _| relax_grid(surface, &grid))
}

/// Largest relative deviation of the averaged edge spacing from the ideal equal spacing.
///
/// Zero means every u step (averaged over rows) and every v step (averaged over
/// columns) covers the same surface length.
pub fn spacing_deviation(surface: &SuperquadricSurface, grid: &ParameterGrid) -> f64 {
    let rows = grid
        .v
        .iter()
        .map(|&vj| grid.u.iter().map(|&ui| surface.point(ui, vj)).collect::<Vec<_>>());
    let columns = grid
        .u
        .iter()
        .map(|&ui| grid.v.iter().map(|&vj| surface.point(ui, vj)).collect::<Vec<_>>());
    let along_u = averaged_cumulative(rows, grid.u.len());
    let along_v = averaged_cumulative(columns, grid.v.len());
    relative_step_deviation(&along_u).max(relative_step_deviation(&along_v))
}

/// Largest relative deviation of edge length from the ideal spacing along any
/// single grid row or column
pub fn max_line_deviation(surface: &SuperquadricSurface, grid: &ParameterGrid) -> f64 {
    let rows = grid
        .v
        .iter()
        .map(|&vj| grid.u.iter().map(|&ui| surface.point(ui, vj)).collect::<Vec<_>>());
    let columns = grid
        .u
        .iter()
        .map(|&ui| grid.v.iter().map(|&vj| surface.point(ui, vj)).collect::<Vec<_>>());
    rows.chain(columns)
        .map(|line| relative_step_deviation(&cumulative_lengths(&line)))
        .fold(0.0, f64::max)
}

fn relative_step_deviation(cumulative: &[f64]) -> f64 {
    let steps = cumulative.len().saturating_sub(1);
    let total = cumulative.last().copied().unwrap_or(0.0);
    if steps == 0 || total <= 0.0 {
        return 0.0;
    }
    let ideal = total / steps as f64;
    cumulative
        .windows(2)
        .map(|w| ((w[1] - w[0]) - ideal).abs() / ideal)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superquadric::deform::Deformation;
    use crate::superquadric::sampling::{arc_length_sample, linspace};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn boxy() -> SuperquadricSurface {
        SuperquadricSurface::new(Vector3::new(1.0, 2.0, 0.5), Vector3::new(5.0, 5.0, 5.0), Deformation::default())
    }

    fn uniform_grid(n: usize) -> ParameterGrid {
        ParameterGrid {
            u: linspace(-PI, PI, n),
            v: linspace(-FRAC_PI_2, FRAC_PI_2, n),
        }
    }

    #[test]
    fn test_averaged_cumulative() {
        let a = vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)];
        let b = vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(3.0, 0.0, 0.0)];
        assert_eq!(averaged_cumulative(vec![a, b], 2), vec![0.0, 2.0]);
    }

    #[test]
    fn test_relaxation_keeps_endpoints_and_order() {
        let surface = boxy();
        let grid = relax_iterations(&surface, uniform_grid(20), 5);
        assert_eq!(grid.u.len(), 20);
        assert_eq!(grid.v.len(), 20);
        assert_relative_eq!(grid.u[0], -PI);
        assert_relative_eq!(grid.u[19], PI);
        assert_relative_eq!(grid.v[0], -FRAC_PI_2);
        assert_relative_eq!(grid.v[19], FRAC_PI_2);
        assert!(grid.u.windows(2).all(|w| w[0] <= w[1]));
        assert!(grid.v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_relaxation_evens_out_spacing() {
        let surface = boxy();
        let start = uniform_grid(20);
        let before = spacing_deviation(&surface, &start);
        let relaxed = relax_iterations(&surface, start, 5);
        let after = spacing_deviation(&surface, &relaxed);
        assert!(after < before, "deviation went from {} to {}", before, after);
    }

    fn seed_grid(surface: &SuperquadricSurface, n: usize) -> ParameterGrid {
        ParameterGrid {
            u: arc_length_sample(-PI, PI, n, 500, |u| surface.point(u, 0.0)),
            v: arc_length_sample(-FRAC_PI_2, FRAC_PI_2, n, 500, |v| surface.point(0.0, v)),
        }
    }

    #[test]
    fn test_relaxation_evens_out_every_line() {
        let shapes = [
            (Vector3::new(1.0, 1.5, 2.0), Vector3::new(4.0, 4.0, 1.5)),
            (Vector3::new(2.0, 1.0, 1.0), Vector3::new(2.0, 2.0, 4.0)),
        ];
        for (scalings, exponents) in shapes {
            let surface = SuperquadricSurface::new(scalings, exponents, Deformation::default());
            let seed = seed_grid(&surface, 20);
            let before = max_line_deviation(&surface, &seed);
            let relaxed = relax_iterations(&surface, seed, 5);
            let after = max_line_deviation(&surface, &relaxed);
            assert!(
                after < 0.75 * before,
                "worst line deviation went from {} to {} for {:?}",
                before,
                after,
                exponents
            );
        }
    }

    #[test]
    fn test_collapsed_surface_keeps_parameters() {
        // a zero-length curve cannot be inverted, so the grid is left as it was
        let surface = SuperquadricSurface::new(Vector3::zeros(), Vector3::new(2.0, 2.0, 2.0), Deformation::default());
        let start = uniform_grid(10);
        let relaxed = relax_grid(&surface, &start);
        assert_eq!(relaxed, start);
    }
}
