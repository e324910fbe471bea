/// Data layer: table types, loading, stratification, sampling, writing.
///
/// Architecture:
/// ```text
///   input .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LoanTable (raw fields)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  year cell → row indices, ascending
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sampler   │  RowBudget + seeded draw per year → sampled LoanTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  LoanTable → output .csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod partition;
pub mod sampler;
pub mod writer;
