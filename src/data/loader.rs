use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, LoanTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a header row and every record into memory.
///
/// Fields are kept verbatim; typing only happens when a column is used as a
/// grouping key (see [`guess_cell_type`]). Ragged rows are a parse error.
pub fn load_csv(path: &Path) -> Result<LoanTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record);
    }

    log::info!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );
    Ok(LoanTable::new(headers, rows))
}

/// Tokens a dataframe reader treats as missing by default.
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Interpret raw CSV text the way a dataframe reader would infer it.
///
/// Integral floats (`2015.0`) come back as `Integer` so a year column written
/// as floats keys the same partitions as one written as integers.
pub fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() || NA_TOKENS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_nan() {
            return CellValue::Null;
        }
        // 2^63 is exact in f64; anything below it fits an i64.
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            return CellValue::Integer(f as i64);
        }
        return CellValue::Float(f);
    }
    match s {
        "true" | "True" | "TRUE" => CellValue::Bool(true),
        "false" | "False" | "FALSE" => CellValue::Bool(false),
        _ => CellValue::String(s.to_string()),
    }
}
