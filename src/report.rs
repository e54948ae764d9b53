use crate::data::model::{Dimension, FlavorProfile};

// ---------------------------------------------------------------------------
// FlavorReport – a blend profile ranked for display
// ---------------------------------------------------------------------------

/// A blend profile ordered for presentation: every dimension with its value,
/// strongest first. Ties keep canonical dimension order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlavorReport {
    /// All six dimensions, sorted by value descending.
    pub sorted_dimensions: Vec<(Dimension, f64)>,
    /// The first entry of `sorted_dimensions`.
    pub dominant: (Dimension, f64),
}

/// Rank a profile's dimensions by value, descending. The sort is stable over
/// canonical order, so equal values fall back to canonical order and the
/// dominant dimension of an all-equal profile is Sweetness.
pub fn build_report(profile: &FlavorProfile) -> FlavorReport {
    let mut sorted: Vec<(Dimension, f64)> = profile.iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    let dominant = sorted[0];
    FlavorReport {
        sorted_dimensions: sorted,
        dominant,
    }
}
