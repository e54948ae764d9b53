use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::generate_palette;
use crate::report::FlavorReport;

// ---------------------------------------------------------------------------
// Flavor profile chart (central panel)
// ---------------------------------------------------------------------------

/// Render the blend profile as a bar chart, strongest flavor first.
///
/// The vertical axis is pinned to 0–100 and the bars keep the report's rank
/// order, so the chart reads the same way as the results table above it.
pub fn profile_chart(ui: &mut Ui, report: &FlavorReport) {
    let palette = generate_palette(report.sorted_dimensions.len());

    let bars: Vec<Bar> = report
        .sorted_dimensions
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (&(dim, value), color))| {
            Bar::new(i as f64, value)
                .width(0.6)
                .name(format!("{dim}: {value:.1}%"))
                .fill(color)
        })
        .collect();

    let labels: Vec<String> = report
        .sorted_dimensions
        .iter()
        .map(|&(dim, _)| dim.to_string())
        .collect();

    Plot::new("flavor_profile")
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if rounded < 0.0 || (mark.value - rounded).abs() > 0.01 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .y_axis_label("Intensity (%)")
        .include_y(0.0)
        .include_y(100.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
