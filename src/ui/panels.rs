use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::numerics::integrate::ANALYTIC_VOLUME;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – estimates and convergence table
// ---------------------------------------------------------------------------

/// Render the left panel with the numeric results.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Volume of z = x² + y²");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::CollapsingHeader::new(RichText::new("Estimates").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    egui::Grid::new("estimates_grid")
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            ui.strong("Method");
                            ui.strong("Volume");
                            ui.strong("|Δ| from 2/3");
                            ui.end_row();

                            for est in &state.estimates {
                                ui.label(&est.method);
                                ui.monospace(format!("{:.10}", est.volume));
                                ui.monospace(format!("{:.2e}", est.deviation()));
                                ui.end_row();
                            }
                        });
                });

            egui::CollapsingHeader::new(RichText::new("Riemann convergence").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    egui::Grid::new("convergence_grid")
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            ui.strong("Grid");
                            ui.strong("Volume");
                            ui.strong("Error");
                            ui.end_row();

                            for row in &state.convergence {
                                ui.label(format!("{0}×{0}", row.n));
                                ui.monospace(format!("{:.8}", row.volume));
                                ui.monospace(format!("{:.2e}", row.error));
                                ui.end_row();
                            }
                        });
                });

            egui::CollapsingHeader::new(RichText::new("Contour levels").strong())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for (z_low, color) in state.scale.legend_entries().into_iter().rev() {
                        ui.label(RichText::new(format!("z ≥ {z_low:.2}")).color(color));
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Unit-square volume").strong());
        ui.separator();
        ui.label(format!("analytical baseline 2/3 = {ANALYTIC_VOLUME:.10}"));
        ui.separator();

        if ui
            .selectable_label(state.outline_bands, "Outline bands")
            .clicked()
        {
            state.outline_bands = !state.outline_bands;
        }
    });
}
