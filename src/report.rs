use std::fmt::Write;

use rand::Rng;

use crate::numerics::integrate::{
    self, ANALYTIC_VOLUME, CONVERGENCE_GRID_SIZES,
};

// ---------------------------------------------------------------------------
// Estimate records and the stdout report
// ---------------------------------------------------------------------------

/// One volume estimate. Built once per run, never mutated.
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Human-readable method name, e.g. "Riemann Sum (100×100 grid)".
    pub method: String,
    /// The estimated volume.
    pub volume: f64,
    /// Library-reported absolute error bound, where the method has one.
    pub error_bound: Option<f64>,
}

impl Estimate {
    /// Absolute deviation from the analytical baseline.
    pub fn deviation(&self) -> f64 {
        (self.volume - ANALYTIC_VOLUME).abs()
    }
}

/// One row of the Riemann convergence table.
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceRow {
    pub n: usize,
    pub volume: f64,
    pub error: f64,
}

/// Run all four estimators, in the order the report presents them.
pub fn run_estimators<R: Rng + ?Sized>(riemann_n: usize, mc_points: usize, rng: &mut R) -> Vec<Estimate> {
    let (quad_volume, quad_bound) = integrate::quadrature();
    vec![
        Estimate {
            method: "Analytical Solution".to_string(),
            volume: integrate::analytical(),
            error_bound: None,
        },
        Estimate {
            method: "Numerical Integration (Gauss–Kronrod)".to_string(),
            volume: quad_volume,
            error_bound: Some(quad_bound),
        },
        Estimate {
            method: format!("Riemann Sum ({riemann_n}×{riemann_n} grid)"),
            volume: integrate::riemann(riemann_n),
            error_bound: None,
        },
        Estimate {
            method: format!("Monte Carlo Method ({mc_points} points)"),
            volume: integrate::monte_carlo(mc_points, rng),
            error_bound: None,
        },
    ]
}

/// Midpoint-rule sweep across the fixed grid sizes 10/25/50/100/200.
pub fn convergence_sweep() -> Vec<ConvergenceRow> {
    CONVERGENCE_GRID_SIZES
        .iter()
        .map(|&n| {
            let volume = integrate::riemann(n);
            ConvergenceRow {
                n,
                volume,
                error: (volume - ANALYTIC_VOLUME).abs(),
            }
        })
        .collect()
}

/// Render the full report: the four estimates, the step-by-step derivation,
/// and the convergence table.
pub fn render_report(estimates: &[Estimate], sweep: &[ConvergenceRow]) -> String {
    let mut out = String::new();

    out.push_str("Volume Calculation: z = x² + y² over [0,1] × [0,1]\n");
    out.push_str(&"=".repeat(55));
    out.push('\n');

    for (i, est) in estimates.iter().enumerate() {
        let _ = writeln!(out, "{}. {}:", i + 1, est.method);
        if est.method.starts_with("Analytical") {
            let _ = writeln!(out, "   Volume = 2/3 = {:.10}", est.volume);
        } else {
            let _ = writeln!(out, "   Volume = {:.10}", est.volume);
            if let Some(bound) = est.error_bound {
                let _ = writeln!(out, "   Error estimate = {bound:.2e}");
            }
            let _ = writeln!(out, "   Difference from analytical = {:.2e}", est.deviation());
        }
        out.push('\n');
    }

    out.push_str("Step-by-step Analytical Calculation:\n");
    out.push_str(&"-".repeat(35));
    out.push('\n');
    out.push_str("∫₀¹ ∫₀¹ (x² + y²) dx dy\n");
    out.push_str("= ∫₀¹ [∫₀¹ (x² + y²) dx] dy\n");
    out.push_str("= ∫₀¹ [x³/3 + xy²]₀¹ dy\n");
    out.push_str("= ∫₀¹ (1/3 + y²) dy\n");
    out.push_str("= [y/3 + y³/3]₀¹\n");
    out.push_str("= (1/3 + 1/3) - (0)\n");
    out.push_str("= 2/3\n\n");

    out.push_str("Riemann Sum Convergence:\n");
    out.push_str(&"-".repeat(25));
    out.push('\n');
    for row in sweep {
        let _ = writeln!(
            out,
            "Grid {:3}×{:3}: Volume = {:.8}, Error = {:.2e}",
            row.n, row.n, row.volume, row.error
        );
    }

    out
}

/// Print the report to stdout.
pub fn print_report(estimates: &[Estimate], sweep: &[ConvergenceRow]) {
    print!("{}", render_report(estimates, sweep));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn run_estimators_produces_the_four_methods_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let estimates = run_estimators(100, 10_000, &mut rng);
        assert_eq!(estimates.len(), 4);
        assert!(estimates[0].method.starts_with("Analytical"));
        assert!(estimates[1].error_bound.is_some());
        assert!(estimates[2].method.contains("100×100"));
        assert!(estimates[3].method.contains("10000 points"));
    }

    #[test]
    fn sweep_covers_the_fixed_grid_sizes() {
        let sweep = convergence_sweep();
        let sizes: Vec<usize> = sweep.iter().map(|r| r.n).collect();
        assert_eq!(sizes, vec![10, 25, 50, 100, 200]);
    }

    #[test]
    fn report_carries_fixed_precision_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let estimates = run_estimators(100, 1_000, &mut rng);
        let text = render_report(&estimates, &convergence_sweep());

        assert!(text.contains("Volume = 2/3 = 0.6666666667"));
        assert!(text.contains("Riemann Sum Convergence:"));
        assert!(text.contains("Grid 200×200"));
        // Every non-analytical estimate reports its deviation.
        assert_eq!(text.matches("Difference from analytical").count(), 3);
    }
}
