use std::cmp::Ordering;
use std::fmt;

use csv::StringRecord;

use crate::error::SampleError;

/// A cell guessed from CSV text, used as a stratum key.
///
/// Integers and floats are one numeric domain: `2015` and `2015.0` compare
/// equal and land in the same partition. Across kinds the order is
/// null < bool < number < string.
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Float(_) => 2,
            CellValue::String(_) => 3,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
            (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                // partial_cmp keeps -0.0 == 0.0; NaN never reaches here as a
                // key, but total_cmp keeps the order total if it does.
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b)),
                _ => self.kind_rank().cmp(&other.kind_rank()),
            },
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// LoanTable – the complete loaded table
// ---------------------------------------------------------------------------

/// Header plus every data row, kept as the raw fields read from disk so a
/// sampled row is written back exactly as it was read.
#[derive(Debug, Clone, Default)]
pub struct LoanTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl LoanTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        LoanTable { headers, rows }
    }

    /// Position of `name` in the header row.
    pub fn column_index(&self, name: &str) -> Result<usize, SampleError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SampleError::MissingColumn(name.to_string()))
    }

    /// Build a new table from the given row indices, in the order given.
    pub fn take(&self, indices: &[usize]) -> LoanTable {
        LoanTable {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
