use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Dimension – the six flavor axes, in canonical order
// ---------------------------------------------------------------------------

/// One of the six flavor dimensions tracked per spice and per blend.
///
/// The variant order is the canonical dimension order: it drives profile
/// iteration, sort tie-breaks and the line order of the blend log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Sweetness,
    Sourness,
    Saltiness,
    Spiciness,
    Bitterness,
    Umami,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Sweetness,
        Dimension::Sourness,
        Dimension::Saltiness,
        Dimension::Spiciness,
        Dimension::Bitterness,
        Dimension::Umami,
    ];

    /// Column header / display label.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Sweetness => "Sweetness",
            Dimension::Sourness => "Sourness",
            Dimension::Saltiness => "Saltiness",
            Dimension::Spiciness => "Spiciness",
            Dimension::Bitterness => "Bitterness",
            Dimension::Umami => "Umami",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SpiceRecord – one row of the spice table
// ---------------------------------------------------------------------------

/// A single spice (one row of the source CSV). Field renames match the CSV
/// column headers. Values are not bounds-checked and may exceed 0–100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpiceRecord {
    #[serde(rename = "Spice Name")]
    pub name: String,
    #[serde(rename = "Sweetness")]
    pub sweetness: f64,
    #[serde(rename = "Sourness")]
    pub sourness: f64,
    #[serde(rename = "Saltiness")]
    pub saltiness: f64,
    #[serde(rename = "Spiciness")]
    pub spiciness: f64,
    #[serde(rename = "Bitterness")]
    pub bitterness: f64,
    #[serde(rename = "Umami")]
    pub umami: f64,
}

impl SpiceRecord {
    /// Value of a single flavor dimension.
    pub fn value(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Sweetness => self.sweetness,
            Dimension::Sourness => self.sourness,
            Dimension::Saltiness => self.saltiness,
            Dimension::Spiciness => self.spiciness,
            Dimension::Bitterness => self.bitterness,
            Dimension::Umami => self.umami,
        }
    }
}

// ---------------------------------------------------------------------------
// SpiceTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded spice table. Row order is source order; a spice's identity is
/// its positional index. Duplicate names are allowed.
#[derive(Debug, Clone, Default)]
pub struct SpiceTable {
    pub records: Vec<SpiceRecord>,
}

impl SpiceTable {
    pub fn new(records: Vec<SpiceRecord>) -> Self {
        SpiceTable { records }
    }

    /// Number of spices.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpiceRecord> {
        self.records.get(index)
    }
}

// ---------------------------------------------------------------------------
// FlavorProfile – one value per dimension
// ---------------------------------------------------------------------------

/// A complete flavor profile: exactly one value per dimension, stored in
/// canonical order. Blend profiles hold values rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlavorProfile([f64; 6]);

impl FlavorProfile {
    /// Build a profile by evaluating `f` for each dimension in canonical order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        FlavorProfile(Dimension::ALL.map(&mut f))
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim as usize]
    }

    /// Iterate `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(|&dim| (dim, self.get(dim)))
    }
}

// ---------------------------------------------------------------------------
// BlendResult – the outcome of blending a selection
// ---------------------------------------------------------------------------

/// The averaged result of a non-empty selection. `spices_used` keeps pick
/// order and repeats a name once per pick; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendResult {
    pub spices_used: Vec<String>,
    pub profile: FlavorProfile,
}
