use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VolumeLabApp {
    pub state: AppState,
}

impl VolumeLabApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for VolumeLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: estimates and convergence ----
        egui::SidePanel::left("results_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: wireframe and contour, side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                plot::surface_plot(&mut columns[0], &self.state);
                plot::contour_plot(&mut columns[1], &self.state);
            });
        });
    }
}
