use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::required_columns;
use crate::data::model::{Dimension, SpiceRecord};
use crate::state::AppState;
use crate::ui::plot::profile_chart;

// ---------------------------------------------------------------------------
// Left side panel – the spice rack and the current mix
// ---------------------------------------------------------------------------

/// Render the left panel: every available spice, then the pick list.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Spice Rack");
    ui.separator();

    let table = match &state.table {
        Some(table) => table,
        None => {
            ui.label("No spice table loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state inside the loop.
    let records = table.records.clone();
    let picks = state.selection.indices().to_vec();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Available spices ----
            for (idx, rec) in records.iter().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("+").clicked() {
                        state.add_spice(idx);
                    }
                    ui.label(&rec.name).on_hover_text(hover_profile(rec));
                });
            }

            ui.separator();

            // ---- Current picks ----
            ui.strong(format!("Your mix ({})", picks.len()));
            if picks.is_empty() {
                ui.label("Nothing picked yet.");
            } else {
                for (pos, &idx) in picks.iter().enumerate() {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("✕").clicked() {
                            state.remove_pick(pos);
                        }
                        ui.label(format!("{}. {}", pos + 1, records[idx].name));
                    });
                }
                if ui.small_button("Clear all").clicked() {
                    state.clear_selection();
                }
            }
        });
}

/// Tooltip listing a spice's six dimension values.
fn hover_profile(rec: &SpiceRecord) -> String {
    Dimension::ALL
        .iter()
        .map(|&dim| format!("{dim}: {}", rec.value(dim)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Central panel – blend results
// ---------------------------------------------------------------------------

/// Render the central panel: the ranked results and the profile chart, or a
/// hint when there is nothing to show yet.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Open a spice table to start mixing  (File → Open…)");
            ui.add_space(8.0);
            ui.label(format!("Expected columns: {}", required_columns().join(", ")));
        });
        return;
    }

    let (blend, report) = match (&state.blend, &state.report) {
        (Some(blend), Some(report)) => (blend.clone(), report.clone()),
        _ => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading("No spices selected!");
                ui.add_space(8.0);
                ui.label("Pick spices from the rack on the left.");
            });
            return;
        }
    };

    ui.heading("Spice Fusion Results");
    ui.separator();
    ui.label(format!("Spices used: {}", blend.spices_used.join(", ")));
    ui.add_space(4.0);

    // ---- Ranked dimensions (strongest first) ----
    egui::Grid::new("ranked_dimensions")
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for (i, &(dim, value)) in report.sorted_dimensions.iter().enumerate() {
                let mut name_text = RichText::new(dim.label());
                let mut value_text = RichText::new(format!("{value:.1}%"));
                if i == 0 {
                    name_text = name_text.strong();
                    value_text = value_text.strong();
                }
                ui.label(name_text);
                ui.label(value_text);
                ui.end_row();
            }
        });

    ui.add_space(4.0);
    ui.label(format!(
        "Dominant Flavor: {} ({:.1}%)",
        report.dominant.0, report.dominant.1
    ));
    ui.separator();

    // ---- Save row ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Blend name:");
        ui.text_edit_singleline(&mut state.blend_name);
        if ui.button("Save blend").clicked() {
            state.save_blend();
        }
    });
    ui.separator();

    profile_chart(ui, &report);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} spices loaded, {} picked",
                table.len(),
                state.selection.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spice table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_table_from(&path);
    }
}
