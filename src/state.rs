use crate::color::LevelScale;
use crate::numerics::surface::SurfaceGrid;
use crate::report::{ConvergenceRow, Estimate};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Meshgrid resolution handed to the viewer.
pub const GRID_RESOLUTION: usize = 50;

/// Number of bands in the contour view.
pub const CONTOUR_LEVELS: usize = 20;

/// The full UI state, independent of rendering. Everything here is computed
/// once up front; the viewer only reads it.
pub struct AppState {
    /// Sampled surface feeding both plots.
    pub grid: SurfaceGrid,

    /// Height → band colour mapping shared by the two plots.
    pub scale: LevelScale,

    /// The four volume estimates, in report order.
    pub estimates: Vec<Estimate>,

    /// Riemann convergence table rows.
    pub convergence: Vec<ConvergenceRow>,

    /// Whether the contour view draws band boundaries as thin lines.
    pub outline_bands: bool,
}

impl AppState {
    /// Build the state from the already-computed estimates.
    pub fn new(estimates: Vec<Estimate>, convergence: Vec<ConvergenceRow>) -> Self {
        let grid = SurfaceGrid::sample(GRID_RESOLUTION);
        let scale = LevelScale::new(grid.z_min(), grid.z_max(), CONTOUR_LEVELS);
        Self {
            grid,
            scale,
            estimates,
            convergence,
            outline_bands: false,
        }
    }
}
