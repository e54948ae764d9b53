use std::path::Path;

use crate::data::blend::compute_blend;
use crate::data::loader::load_spice_table;
use crate::data::model::{BlendResult, SpiceTable};
use crate::data::selection::SelectionSet;
use crate::persist;
use crate::report::{build_report, FlavorReport};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded spice table (None until the user loads a file).
    pub table: Option<SpiceTable>,

    /// Picked spice indices, in pick order.
    pub selection: SelectionSet,

    /// Blend of the current selection (None while nothing is picked; cached).
    pub blend: Option<BlendResult>,

    /// Ranked view of `blend` for display (cached).
    pub report: Option<FlavorReport>,

    /// Name the next save will use.
    pub blend_name: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            selection: SelectionSet::new(),
            blend: None,
            report: None,
            blend_name: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, dropping picks made against the old one.
    pub fn set_table(&mut self, table: SpiceTable) {
        self.selection.clear();
        self.table = Some(table);
        self.status_message = None;
        self.reblend();
    }

    /// Load a spice table from `path`, replacing any current table.
    pub fn load_table_from(&mut self, path: &Path) {
        match load_spice_table(path) {
            Ok(table) => {
                log::info!("Loaded {} spices from '{}'", table.len(), path.display());
                self.set_table(table);
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Append the spice at `index` to the pick list.
    pub fn add_spice(&mut self, index: usize) {
        let table_len = match &self.table {
            Some(table) => table.len(),
            None => return,
        };
        if self.selection.push(index, table_len) {
            self.status_message = None;
            self.reblend();
        } else {
            self.status_message = Some(format!("Invalid spice index: {index}"));
        }
    }

    /// Remove one pick by its position in the pick list.
    pub fn remove_pick(&mut self, pos: usize) {
        self.selection.remove_at(pos);
        self.reblend();
    }

    /// Drop every pick.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.reblend();
    }

    /// Recompute the cached blend and report from the current selection.
    fn reblend(&mut self) {
        self.blend = self
            .table
            .as_ref()
            .and_then(|table| compute_blend(table, &self.selection));
        self.report = self.blend.as_ref().map(|b| build_report(&b.profile));
    }

    /// Append the current blend to the default blend log.
    pub fn save_blend(&mut self) {
        self.save_blend_to(Path::new(persist::DEFAULT_BLEND_LOG));
    }

    /// Append the current blend to the log at `path`, reporting the outcome
    /// in the status line.
    pub fn save_blend_to(&mut self, path: &Path) {
        let name = self.blend_name.trim().to_string();
        let message = match &self.blend {
            None => "No spices selected!".to_string(),
            Some(_) if name.is_empty() => "Name your blend before saving.".to_string(),
            Some(blend) => match persist::append_blend(path, &name, blend) {
                Ok(()) => {
                    log::info!("Saved blend '{name}' to '{}'", path.display());
                    format!("Blend saved to '{}'", path.display())
                }
                Err(e) => {
                    log::error!("Failed to save blend: {e:#}");
                    format!("Error: {e:#}")
                }
            },
        };
        self.status_message = Some(message);
    }
}
