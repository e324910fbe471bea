use std::path::Path;

use anyhow::{Context, Result};

use super::model::LoanTable;

/// Write `table` as CSV: header, then rows in table order. No index column.
pub fn write_csv(table: &LoanTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}
