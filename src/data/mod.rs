/// Data layer: core types, loading, selection, and blending.
///
/// Architecture:
/// ```text
///  .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + schema check → SpiceTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ SpiceTable  │  Vec<SpiceRecord>, canonical dimensions
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ selection   │  ordered picks by row index
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   blend     │  average the picks → BlendResult
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod selection;
pub mod blend;
