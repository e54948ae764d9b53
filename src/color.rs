use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Warm palette for the flavor bars
// ---------------------------------------------------------------------------

/// Hue range swept by the palette, red-orange down to gold.
const HUE_START: f32 = 18.0;
const HUE_END: f32 = 55.0;

/// Generates `n` warm colours, hottest first. The chart applies them in rank
/// order, so the strongest flavor gets the deepest tone.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 {
                0.0
            } else {
                i as f32 / (n - 1) as f32
            };
            let hue = HUE_START + t * (HUE_END - HUE_START);
            let hsl = Hsl::new(hue, 0.85, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
