use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::BlendResult;

/// Default path of the blend log, relative to the working directory.
pub const DEFAULT_BLEND_LOG: &str = "my_spice_blends.txt";

/// Append a named blend to the blend log at `path`, creating the file on
/// first use.
///
/// Each call writes one block: a separating blank line, a header line with
/// the blend name and the picked spices, then one `Dimension: value%` line
/// per dimension in canonical order.
pub fn append_blend(path: &Path, name: &str, blend: &BlendResult) -> Result<()> {
    let mut block = format!("\n{}: {}\n", name, blend.spices_used.join(", "));
    for (dim, value) in blend.profile.iter() {
        block.push_str(&format!("{dim}: {value:.1}%\n"));
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open '{}'", path.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("could not write '{}'", path.display()))?;

    Ok(())
}
