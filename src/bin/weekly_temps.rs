use anyhow::{anyhow, Result};
use eframe::egui::{self, Align2, Color32, RichText};
use egui_plot::{GridMark, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

// ---------------------------------------------------------------------------
// Weekly temperature report: fixed series, summary stats, annotated line plot
// ---------------------------------------------------------------------------

/// One reading per day, Mon..Sun, in °C.
const TEMPERATURES: [i32; 7] = [20, 22, 19, 23, 21, 24, 20];
const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Matplotlib-ish steel blue for the series line.
const SERIES_COLOR: Color32 = Color32::from_rgb(0x2e, 0x86, 0xc1);

/// The week's readings and their summary statistics.
struct WeeklyTempReport {
    temps: [i32; 7],
}

impl WeeklyTempReport {
    fn new(temps: [i32; 7]) -> Self {
        Self { temps }
    }

    fn average(&self) -> f64 {
        self.temps.iter().sum::<i32>() as f64 / self.temps.len() as f64
    }

    fn maximum(&self) -> i32 {
        *self.temps.iter().max().unwrap()
    }

    fn minimum(&self) -> i32 {
        *self.temps.iter().min().unwrap()
    }

    fn range(&self) -> i32 {
        self.maximum() - self.minimum()
    }
}

// ---------------------------------------------------------------------------
// Viewer
// ---------------------------------------------------------------------------

struct WeeklyTempsApp {
    report: WeeklyTempReport,
}

impl eframe::App for WeeklyTempsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label(RichText::new("Weekly Temperature Readings").strong());
                ui.separator();
                ui.label(format!("avg {:.1}°C", self.report.average()));
                ui.label(format!("max {}°C", self.report.maximum()));
                ui.label(format!("min {}°C", self.report.minimum()));
                ui.label(format!("range {}°C", self.report.range()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let report = &self.report;

            let series: Vec<[f64; 2]> = report
                .temps
                .iter()
                .enumerate()
                .map(|(i, &t)| [i as f64, t as f64])
                .collect();

            Plot::new("weekly_temps")
                .x_axis_label("Day of the Week")
                .y_axis_label("Temperature (°C)")
                .x_axis_formatter(|mark: GridMark, _range| {
                    let i = mark.value.round() as i64;
                    if (mark.value - i as f64).abs() < 1e-6 && (0..7).contains(&i) {
                        DAYS[i as usize].to_string()
                    } else {
                        String::new()
                    }
                })
                .include_y(f64::from(report.minimum()) - 2.0)
                .include_y(f64::from(report.maximum()) + 2.0)
                .include_x(-0.5)
                .include_x(6.5)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(series.clone()))
                            .color(SERIES_COLOR)
                            .width(2.0),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(series))
                            .color(SERIES_COLOR)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(5.0),
                    );

                    // Value label just above each marker.
                    for (i, &t) in report.temps.iter().enumerate() {
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(i as f64, f64::from(t) + 0.4),
                                RichText::new(format!("{t}°C")).size(12.0),
                            )
                            .anchor(Align2::CENTER_BOTTOM),
                        );
                    }
                });
        });
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let report = WeeklyTempReport::new(TEMPERATURES);

    println!("Weekly Temperature Summary:");
    println!("Average temperature: {:.1}°C", report.average());
    println!("Highest temperature: {}°C", report.maximum());
    println!("Lowest temperature: {}°C", report.minimum());
    println!("Temperature range: {}°C", report.range());

    log::info!("summary computed for {} readings", report.temps.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([500.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Weekly Temperature Readings",
        options,
        Box::new(|_cc| Ok(Box::new(WeeklyTempsApp { report }))),
    )
    .map_err(|e| anyhow!("starting the viewer: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_the_exact_mean() {
        let report = WeeklyTempReport::new(TEMPERATURES);
        assert!((report.average() - 149.0 / 7.0).abs() <= f64::EPSILON);
        assert_eq!(format!("{:.1}", report.average()), "21.3");
    }

    #[test]
    fn extrema_and_range() {
        let report = WeeklyTempReport::new(TEMPERATURES);
        assert_eq!(report.maximum(), 24);
        assert_eq!(report.minimum(), 19);
        assert_eq!(report.range(), 5);
    }

    #[test]
    fn days_and_readings_stay_paired() {
        assert_eq!(DAYS.len(), TEMPERATURES.len());
    }
}
