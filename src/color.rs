use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Height colormap
// ---------------------------------------------------------------------------

/// Map a normalized height `t ∈ [0,1]` to a colour, sweeping the hue from
/// deep blue (low) through green to yellow (high).
pub fn height_color(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    let hue = 250.0 - t * 190.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Contour level scale: height → discrete band colour
// ---------------------------------------------------------------------------

/// Quantizes heights into a fixed number of contour bands, each with its own
/// colour from the height ramp.
#[derive(Debug, Clone)]
pub struct LevelScale {
    min: f64,
    max: f64,
    band_colors: Vec<Color32>,
}

impl LevelScale {
    /// Build a scale spanning `[min, max]` with `levels` bands.
    pub fn new(min: f64, max: f64, levels: usize) -> Self {
        debug_assert!(levels >= 1 && max > min);
        let band_colors = (0..levels)
            .map(|i| height_color((i as f64 + 0.5) / levels as f64))
            .collect();
        LevelScale {
            min,
            max,
            band_colors,
        }
    }

    /// Number of bands.
    pub fn levels(&self) -> usize {
        self.band_colors.len()
    }

    /// Band index for a height; heights at or above `max` land in the top band.
    pub fn band_for(&self, z: f64) -> usize {
        let t = ((z - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        ((t * self.levels() as f64) as usize).min(self.levels() - 1)
    }

    /// Band colour for a height.
    pub fn color_for(&self, z: f64) -> Color32 {
        self.band_colors[self.band_for(z)]
    }

    /// Legend entries: lower band boundary → colour, bottom band first.
    pub fn legend_entries(&self) -> Vec<(f64, Color32)> {
        let width = (self.max - self.min) / self.levels() as f64;
        self.band_colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.min + i as f64 * width, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_the_requested_band_count() {
        let scale = LevelScale::new(0.0, 2.0, 20);
        assert_eq!(scale.levels(), 20);
        assert_eq!(scale.legend_entries().len(), 20);
    }

    #[test]
    fn band_lookup_covers_the_full_range() {
        let scale = LevelScale::new(0.0, 2.0, 20);
        assert_eq!(scale.band_for(0.0), 0);
        assert_eq!(scale.band_for(1.0), 10);
        // Heights at the top of the range stay inside the last band.
        assert_eq!(scale.band_for(2.0), 19);
        assert_eq!(scale.band_for(5.0), 19);
    }

    #[test]
    fn ramp_endpoints_differ() {
        assert_ne!(height_color(0.0), height_color(1.0));
    }
}
