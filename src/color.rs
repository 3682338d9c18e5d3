use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: job title → Color32
// ---------------------------------------------------------------------------

/// Assigns each job title of a drill-down its own colour.
#[derive(Debug, Clone, Default)]
pub struct TitleColors {
    mapping: HashMap<String, Color32>,
}

impl TitleColors {
    /// One colour per title, hues assigned in the order given.
    pub fn new<'a>(titles: impl IntoIterator<Item = &'a str>) -> Self {
        let titles: Vec<&str> = titles.into_iter().collect();
        let palette = generate_palette(titles.len());
        let mapping = titles
            .into_iter()
            .zip(palette)
            .map(|(t, c)| (t.to_string(), c))
            .collect();
        TitleColors { mapping }
    }

    pub fn color_for(&self, title: &str) -> Color32 {
        self.mapping.get(title).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn unknown_title_falls_back_to_gray() {
        let colors = TitleColors::new(["Data Scientist", "ML Engineer"]);
        assert_ne!(colors.color_for("Data Scientist"), colors.color_for("ML Engineer"));
        assert_eq!(colors.color_for("Astronaut"), Color32::GRAY);
    }
}
