use rand::rngs::StdRng;
use rand::SeedableRng;

use super::model::{CellValue, LoanTable};
use super::partition::Partitions;
use crate::error::SampleError;

// ---------------------------------------------------------------------------
// Row budget
// ---------------------------------------------------------------------------

/// How many rows fit under the byte ceiling, and how many each year gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBudget {
    /// Mean on-disk size of one input row (header bytes included).
    pub bytes_per_row: f64,
    pub max_total_rows: usize,
    pub distinct_years: usize,
    pub n_per_year: usize,
}

impl RowBudget {
    /// Derive the per-year quota from the input file's size and shape.
    ///
    /// The per-row cost is a uniform estimate, so the written file only
    /// approximates `target_bytes`.
    pub fn estimate(
        file_bytes: u64,
        total_rows: usize,
        distinct_years: usize,
        target_bytes: u64,
    ) -> Result<Self, SampleError> {
        if total_rows == 0 {
            return Err(SampleError::EmptyInput);
        }
        if distinct_years == 0 {
            return Err(SampleError::NoYears);
        }

        let bytes_per_row = file_bytes as f64 / total_rows as f64;
        // Saturates to usize::MAX for a zero-byte estimate.
        let max_total_rows = (target_bytes as f64 / bytes_per_row).floor() as usize;
        let n_per_year = max_total_rows / distinct_years;
        if n_per_year == 0 {
            return Err(SampleError::BudgetTooSmall {
                target_bytes,
                max_total_rows,
                years: distinct_years,
            });
        }

        Ok(RowBudget {
            bytes_per_row,
            max_total_rows,
            distinct_years,
            n_per_year,
        })
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Draw `min(n, indices.len())` entries of `indices` uniformly without
/// replacement. Output order is draw order.
pub fn sample_indices(indices: &[usize], n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let amount = n.min(indices.len());
    rand::seq::index::sample(&mut rng, indices.len(), amount)
        .into_iter()
        .map(|i| indices[i])
        .collect()
}

/// Outcome for one stratum.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSample {
    pub year: CellValue,
    pub available: usize,
    pub sampled: usize,
}

/// Sample every partition and concatenate the results in key order.
///
/// Each partition gets its own RNG seeded with `seed`, so a year's draw is
/// the same whatever other years are present.
pub fn stratified_sample(
    table: &LoanTable,
    partitions: &Partitions,
    n_per_year: usize,
    seed: u64,
) -> (LoanTable, Vec<YearSample>) {
    let mut picked = Vec::new();
    let mut stats = Vec::with_capacity(partitions.len());

    for (year, rows) in partitions {
        let chosen = sample_indices(rows, n_per_year, seed);
        log::debug!("year {year}: drew {} of {}", chosen.len(), rows.len());
        stats.push(YearSample {
            year: year.clone(),
            available: rows.len(),
            sampled: chosen.len(),
        });
        picked.extend(chosen);
    }

    (table.take(&picked), stats)
}
