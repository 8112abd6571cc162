/// Data layer: core types, loading, column removal and writing.
///
/// Architecture:
/// ```text
///   input .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  prune    │  drop ColumnSet → Dataset + PruneOutcome
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  temp file → rename over output .csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod prune;
pub mod writer;
