mod app;
mod color;
mod numerics;
mod report;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use app::VolumeLabApp;
use eframe::egui;
use state::AppState;

/// Default Riemann grid for the headline estimate.
const RIEMANN_N: usize = 100;

/// Default Monte Carlo sample count.
const MC_POINTS: usize = 100_000;

fn main() -> Result<()> {
    env_logger::init();

    // Compute everything up front and print the report, then hand the numbers
    // to the viewer.
    let mut rng = rand::thread_rng();
    let estimates = report::run_estimators(RIEMANN_N, MC_POINTS, &mut rng);
    let convergence = report::convergence_sweep();
    report::print_report(&estimates, &convergence);

    log::info!(
        "estimates computed: {:?}",
        estimates
            .iter()
            .map(|e| (e.method.as_str(), e.volume))
            .collect::<Vec<_>>()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(estimates, convergence);
    eframe::run_native(
        "Volume Lab – z = x² + y²",
        options,
        Box::new(move |_cc| Ok(Box::new(VolumeLabApp::new(state)))),
    )
    .map_err(|e| anyhow!("starting the viewer: {e}"))?;

    Ok(())
}
