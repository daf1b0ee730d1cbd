/// Data layer: record types, column resolution, loading, and filtering.
///
/// Architecture:
/// ```text
///   facilities.csv
///        │
///        ▼
///   ┌──────────┐
///   │ columns   │  header → lat / lon / name / address
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, coerce coordinates, drop bad rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  bounding box + status → FacilitySet
///   └──────────┘
/// ```

pub mod columns;
pub mod filter;
pub mod loader;
pub mod model;
