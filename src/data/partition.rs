use std::collections::BTreeMap;

use super::loader::guess_cell_type;
use super::model::{CellValue, LoanTable};
use crate::error::SampleError;

// ---------------------------------------------------------------------------
// Partitioning: group row indices by the value of one column
// ---------------------------------------------------------------------------

/// Stratum key → indices of the rows holding that key, in input order.
/// Keys iterate in ascending order.
pub type Partitions = BTreeMap<CellValue, Vec<usize>>;

/// Group the rows of `table` by the typed value of `column`.
///
/// Rows whose cell is empty (`Null`) are left out entirely: they belong to
/// no stratum and do not count as a distinct year.
pub fn partition_by(table: &LoanTable, column: &str) -> Result<Partitions, SampleError> {
    let col_idx = table.column_index(column)?;

    let mut partitions = Partitions::new();
    let mut dropped = 0usize;
    for (i, row) in table.rows.iter().enumerate() {
        let key = guess_cell_type(row.get(col_idx).unwrap_or(""));
        if key.is_null() {
            dropped += 1;
            continue;
        }
        partitions.entry(key).or_default().push(i);
    }

    if dropped > 0 {
        log::warn!("{dropped} rows have no '{column}' value and were skipped");
    }
    log::debug!("'{column}' has {} distinct values", partitions.len());
    Ok(partitions)
}
