use eframe::egui::{Stroke, Ui};
use egui_plot::{Line, Plot, PlotPoints, Polygon};

use crate::color::height_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Surface wireframe (left half of the central panel)
// ---------------------------------------------------------------------------

// Isometric projection constants: 30° viewing angle, heights compressed so
// the z = 2 corner stays in frame.
const COS_ISO: f64 = 0.866_025_403_784_438_6;
const SIN_ISO: f64 = 0.5;
const Z_SCALE: f64 = 0.55;

fn project(x: f64, y: f64, z: f64) -> [f64; 2] {
    [(x - y) * COS_ISO, (x + y) * SIN_ISO + z * Z_SCALE]
}

/// Render the surface as an isometric wireframe, one polyline per grid row
/// and column, coloured by the line's mean height.
pub fn surface_plot(ui: &mut Ui, state: &AppState) {
    let grid = &state.grid;
    let n = grid.resolution();
    let z_max = grid.z_max();

    Plot::new("surface_plot")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Rows: constant y, varying x.
            for j in 0..n {
                let y = grid.ys[j];
                let points: PlotPoints = grid
                    .xs
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| project(x, y, grid.z[j][i]))
                    .collect();
                let mean_z = grid.z[j].iter().sum::<f64>() / n as f64;
                plot_ui.line(
                    Line::new(points)
                        .color(height_color(mean_z / z_max))
                        .width(1.0),
                );
            }

            // Columns: constant x, varying y.
            for i in 0..n {
                let x = grid.xs[i];
                let points: PlotPoints = grid
                    .ys
                    .iter()
                    .enumerate()
                    .map(|(j, &y)| project(x, y, grid.z[j][i]))
                    .collect();
                let mean_z = (0..n).map(|j| grid.z[j][i]).sum::<f64>() / n as f64;
                plot_ui.line(
                    Line::new(points)
                        .color(height_color(mean_z / z_max))
                        .width(1.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Contour view (right half of the central panel)
// ---------------------------------------------------------------------------

/// Render the filled contour view: each grid cell becomes a polygon filled
/// with the colour of the band its mean height falls in.
pub fn contour_plot(ui: &mut Ui, state: &AppState) {
    let grid = &state.grid;
    let scale = &state.scale;
    let n = grid.resolution();

    Plot::new("contour_plot")
        .data_aspect(1.0)
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for j in 0..n - 1 {
                for i in 0..n - 1 {
                    let (x0, x1) = (grid.xs[i], grid.xs[i + 1]);
                    let (y0, y1) = (grid.ys[j], grid.ys[j + 1]);
                    let mean_z = (grid.z[j][i]
                        + grid.z[j][i + 1]
                        + grid.z[j + 1][i]
                        + grid.z[j + 1][i + 1])
                        / 4.0;

                    let color = scale.color_for(mean_z);
                    let stroke = if state.outline_bands {
                        Stroke::new(0.2, color.gamma_multiply(0.6))
                    } else {
                        Stroke::new(0.0, color)
                    };

                    let cell: PlotPoints =
                        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]].into();
                    plot_ui.polygon(Polygon::new(cell).fill_color(color).stroke(stroke));
                }
            }
        });
}
