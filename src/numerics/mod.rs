/// Numeric core: the surface, its sampled grid, and the four volume estimators.
///
/// Architecture:
/// ```text
///   surface(x, y) = x² + y²
///        │
///        ├──────────────────────────────┐
///        ▼                              ▼
///   ┌──────────────┐             ┌─────────────┐
///   │  integrate    │             │ SurfaceGrid  │  50×50 meshgrid for the viewer
///   │  analytical   │             └─────────────┘
///   │  quadrature   │                    │
///   │  riemann(n)   │                    ▼
///   │  monte_carlo  │              ui::plot (fire-and-forget)
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  report   │  Estimate records → stdout
///   └──────────┘
/// ```

pub mod integrate;
pub mod surface;
