use thiserror::Error;

/// Configuration failures detected before any rows are sampled.
///
/// I/O and CSV parse errors are not listed here; they travel as
/// `anyhow::Error` with context attached at the call site.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("input table has no data rows")]
    EmptyInput,

    #[error("no non-null fiscal-year values to stratify on")]
    NoYears,

    #[error("input table is missing column '{0}'")]
    MissingColumn(String),

    #[error(
        "byte ceiling of {target_bytes} bytes allows {max_total_rows} rows, \
         fewer than one per each of {years} years"
    )]
    BudgetTooSmall {
        target_bytes: u64,
        max_total_rows: usize,
        years: usize,
    },
}
