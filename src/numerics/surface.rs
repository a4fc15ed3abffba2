// ---------------------------------------------------------------------------
// The surface under study and its sampled grid
// ---------------------------------------------------------------------------

/// The surface z = x² + y². Pure and deterministic; every estimator and the
/// viewer evaluate this same function.
#[inline]
pub fn surface(x: f64, y: f64) -> f64 {
    x * x + y * y
}

/// A uniform meshgrid of the surface over [0,1] × [0,1].
///
/// `z[j][i]` holds `surface(xs[i], ys[j])`, matching the row-major layout the
/// plot code walks. Built fresh per run and handed to the viewer read-only.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    /// Sample positions along x (length = resolution).
    pub xs: Vec<f64>,
    /// Sample positions along y (length = resolution).
    pub ys: Vec<f64>,
    /// Heights, indexed z[j][i] for (xs[i], ys[j]).
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// Sample the surface at `resolution` × `resolution` evenly spaced nodes,
    /// endpoints included.
    pub fn sample(resolution: usize) -> Self {
        debug_assert!(resolution >= 2, "a grid needs at least two nodes per axis");
        let step = 1.0 / (resolution - 1) as f64;
        let xs: Vec<f64> = (0..resolution).map(|i| i as f64 * step).collect();
        let ys = xs.clone();

        let z = ys
            .iter()
            .map(|&y| xs.iter().map(|&x| surface(x, y)).collect())
            .collect();

        SurfaceGrid { xs, ys, z }
    }

    /// Smallest sampled height (0 at the origin for this surface).
    pub fn z_min(&self) -> f64 {
        self.z
            .iter()
            .flatten()
            .cloned()
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest sampled height (2 at the far corner for this surface).
    pub fn z_max(&self) -> f64 {
        self.z
            .iter()
            .flatten()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Nodes per axis.
    pub fn resolution(&self) -> usize {
        self.xs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_x_squared_plus_y_squared() {
        assert_eq!(surface(0.0, 0.0), 0.0);
        assert_eq!(surface(1.0, 1.0), 2.0);
        assert_eq!(surface(0.5, 0.5), 0.5);
        assert_eq!(surface(0.25, 0.75), 0.0625 + 0.5625);
    }

    #[test]
    fn grid_has_requested_shape_and_spans_unit_square() {
        let grid = SurfaceGrid::sample(50);
        assert_eq!(grid.resolution(), 50);
        assert_eq!(grid.z.len(), 50);
        assert!(grid.z.iter().all(|row| row.len() == 50));

        assert_eq!(grid.xs[0], 0.0);
        assert_eq!(*grid.xs.last().unwrap(), 1.0);
        assert_eq!(grid.z[0][0], 0.0);
        assert_eq!(grid.z[49][49], 2.0);
    }

    #[test]
    fn grid_extrema_match_the_corners() {
        let grid = SurfaceGrid::sample(25);
        assert_eq!(grid.z_min(), 0.0);
        assert_eq!(grid.z_max(), 2.0);
    }
}
