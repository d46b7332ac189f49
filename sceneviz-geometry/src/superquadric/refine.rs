//! Curvature-driven refinement of the parameter grid

use super::surface::SuperquadricSurface;
use super::ParameterGrid;

/// Insert parameter midpoints on every grid edge whose endpoint normals disagree.
///
/// An edge is split when the dot product of its endpoint normals is below
/// `threshold`. A u midpoint found on any row is added to every row (and the
/// same for v), so the grid stays rectangular.
pub fn subdivide_high_curvature(
    surface: &SuperquadricSurface,
    grid: &ParameterGrid,
    threshold: f64,
    eps: f64,
) -> ParameterGrid {
    let (nu, nv) = (grid.nu(), grid.nv());
    let normals: Vec<Vec<_>> = grid
        .v
        .iter()
        .map(|&v| grid.u.iter().map(|&u| surface.normal(u, v, eps)).collect())
        .collect();

    let mut u = grid.u.clone();
    let mut v = grid.v.clone();

    for row in &normals {
        for i in 0..nu.saturating_sub(1) {
            if row[i].dot(&row[i + 1]) < threshold {
                u.push(0.5 * (grid.u[i] + grid.u[i + 1]));
            }
        }
    }
    for i in 0..nu {
        for j in 0..nv.saturating_sub(1) {
            if normals[j][i].dot(&normals[j + 1][i]) < threshold {
                v.push(0.5 * (grid.v[j] + grid.v[j + 1]));
            }
        }
    }

    sort_unique(&mut u);
    sort_unique(&mut v);
    ParameterGrid { u, v }
}

fn sort_unique(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superquadric::deform::Deformation;
    use crate::superquadric::sampling::linspace;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn grid(n: usize) -> ParameterGrid {
        ParameterGrid {
            u: linspace(-PI, PI, n),
            v: linspace(-FRAC_PI_2, FRAC_PI_2, n),
        }
    }

    #[test]
    fn test_smooth_fine_grid_only_splits_at_poles() {
        let sphere = SuperquadricSurface::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(2.0, 2.0, 2.0), Deformation::default());
        let start = grid(40);
        let refined = subdivide_high_curvature(&sphere, &start, 0.95, 1e-4);

        // pole rows have vanishing normals, every other neighbour pair is within ~9 degrees
        assert!(refined.nv() > start.nv());
        let interior = refined
            .v
            .iter()
            .filter(|v| v.abs() < FRAC_PI_2 - 0.2)
            .count();
        let interior_before = start.v.iter().filter(|v| v.abs() < FRAC_PI_2 - 0.2).count();
        assert_eq!(interior, interior_before);
    }

    #[test]
    fn test_box_corners_are_refined() {
        let boxy = SuperquadricSurface::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(10.0, 10.0, 10.0), Deformation::default());
        let start = grid(12);
        let refined = subdivide_high_curvature(&boxy, &start, 0.95, 1e-4);
        assert!(refined.nu() > start.nu());
        assert!(refined.nv() > start.nv());
    }

    #[test]
    fn test_result_is_sorted_and_unique() {
        let boxy = SuperquadricSurface::new(Vector3::new(1.0, 2.0, 0.5), Vector3::new(6.0, 6.0, 6.0), Deformation::default());
        let refined = subdivide_high_curvature(&boxy, &grid(15), 0.95, 1e-4);
        assert!(refined.u.windows(2).all(|w| w[0] < w[1]));
        assert!(refined.v.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(refined.u[0], -PI);
        assert_eq!(*refined.v.last().unwrap(), FRAC_PI_2);
    }
}
