use peroxide::numerical::integral::{integrate, Integral};
use rand::Rng;

use super::surface::surface;

// ---------------------------------------------------------------------------
// Four estimators for the volume under z = x² + y² over [0,1] × [0,1]
// ---------------------------------------------------------------------------

/// The exact value of ∫₀¹∫₀¹ (x² + y²) dx dy.
///
/// ∫₀¹ [x³/3 + xy²]₀¹ dy = ∫₀¹ (1/3 + y²) dy = 1/3 + 1/3 = 2/3.
pub const ANALYTIC_VOLUME: f64 = 2.0 / 3.0;

/// Absolute tolerance requested from the adaptive quadrature, per axis.
const QUAD_TOL: f64 = 1e-9;

/// Iteration cap for the adaptive refinement.
const QUAD_MAX_ITER: u32 = 20;

/// Grid sizes used to demonstrate midpoint-rule convergence.
pub const CONVERGENCE_GRID_SIZES: [usize; 5] = [10, 25, 50, 100, 200];

/// The closed-form volume.
pub fn analytical() -> f64 {
    ANALYTIC_VOLUME
}

/// Adaptive double quadrature: Gauss–Kronrod G7K15 nested once per axis,
/// refined until [`QUAD_TOL`] is met on each.
///
/// Returns the estimate together with the absolute error bound the requested
/// tolerances imply: the outer pass contributes `QUAD_TOL`, and each inner
/// pass contributes up to `QUAD_TOL` over the unit-width outer interval.
pub fn quadrature() -> (f64, f64) {
    let volume = integrate(
        |y| {
            integrate(
                |x| surface(x, y),
                (0.0, 1.0),
                Integral::G7K15(QUAD_TOL, QUAD_MAX_ITER),
            )
        },
        (0.0, 1.0),
        Integral::G7K15(QUAD_TOL, QUAD_MAX_ITER),
    );
    (volume, 2.0 * QUAD_TOL)
}

/// Midpoint-rule Riemann sum over an n×n partition of the unit square.
///
/// Deterministic for a given `n`; truncation error shrinks as O(1/n²).
pub fn riemann(n: usize) -> f64 {
    debug_assert!(n >= 1, "riemann needs at least one cell per axis");
    let h = 1.0 / n as f64;
    let cell_area = h * h;

    let mut volume = 0.0;
    for i in 0..n {
        let x = (i as f64 + 0.5) * h;
        for j in 0..n {
            let y = (j as f64 + 0.5) * h;
            volume += surface(x, y) * cell_area;
        }
    }
    volume
}

/// Monte Carlo estimate: the sample mean of the surface at `n_points` uniform
/// draws from the unit square (base area 1, so mean height = volume).
///
/// The caller supplies the RNG so runs can be reproduced under a fixed seed;
/// statistical error shrinks as O(1/√n_points).
pub fn monte_carlo<R: Rng + ?Sized>(n_points: usize, rng: &mut R) -> f64 {
    debug_assert!(n_points >= 1, "monte_carlo needs at least one sample");
    let mut sum = 0.0;
    for _ in 0..n_points {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        sum += surface(x, y);
    }
    sum / n_points as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn analytical_is_two_thirds() {
        assert!((analytical() - 2.0 / 3.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn quadrature_lands_within_its_own_error_bound() {
        let (volume, bound) = quadrature();
        assert!(bound > 0.0);
        assert!(
            (volume - ANALYTIC_VOLUME).abs() < bound,
            "volume {volume} missed 2/3 by more than the reported bound {bound:e}"
        );
    }

    #[test]
    fn riemann_is_deterministic() {
        assert_eq!(riemann(73), riemann(73));
    }

    #[test]
    fn riemann_with_a_single_cell_evaluates_the_center() {
        // One cell of area 1 with midpoint (0.5, 0.5): f(0.5, 0.5) = 0.5.
        assert_eq!(riemann(1), 0.5);
    }

    #[test]
    fn riemann_error_strictly_shrinks_across_the_sweep() {
        let errors: Vec<f64> = CONVERGENCE_GRID_SIZES
            .iter()
            .map(|&n| (riemann(n) - ANALYTIC_VOLUME).abs())
            .collect();
        for pair in errors.windows(2) {
            assert!(
                pair[1] < pair[0],
                "error did not shrink: {:?}",
                errors
            );
        }
    }

    #[test]
    fn riemann_truncation_error_is_quadratic_in_cell_size() {
        // Doubling n should cut the midpoint error by roughly 4×.
        let e100 = (riemann(100) - ANALYTIC_VOLUME).abs();
        let e200 = (riemann(200) - ANALYTIC_VOLUME).abs();
        let ratio = e100 / e200;
        assert!((3.5..4.5).contains(&ratio), "ratio was {ratio}");
    }

    #[test]
    fn monte_carlo_converges_under_a_fixed_seed() {
        let mut rng = StdRng::seed_from_u64(42);
        let volume = monte_carlo(100_000, &mut rng);
        assert!((volume - ANALYTIC_VOLUME).abs() < 0.01, "got {volume}");
    }

    #[test]
    fn monte_carlo_stays_inside_the_surface_range() {
        // f ∈ [0, 2] over the domain, so the sample mean must be too.
        let mut rng = StdRng::seed_from_u64(7);
        let volume = monte_carlo(1_000, &mut rng);
        assert!((0.0..=2.0).contains(&volume));
    }

    #[test]
    fn monte_carlo_is_reproducible_for_equal_seeds() {
        let a = monte_carlo(10_000, &mut StdRng::seed_from_u64(123));
        let b = monte_carlo(10_000, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }
}
