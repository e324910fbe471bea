use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::SamplingConfig;
use crate::data::loader::load_csv;
use crate::data::partition::partition_by;
use crate::data::sampler::{stratified_sample, RowBudget, YearSample};
use crate::data::writer::write_csv;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub budget: RowBudget,
    pub years: Vec<YearSample>,
    pub rows_written: usize,
    pub output_path: PathBuf,
    pub output_bytes: u64,
}

impl SampleReport {
    pub fn output_mb(&self) -> f64 {
        self.output_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Load, budget, stratify, sample, write.
pub fn run(config: &SamplingConfig) -> Result<SampleReport> {
    let input_path = config.input_path();
    let output_path = config.output_path();

    let loans = load_csv(&input_path)?;
    let file_bytes = std::fs::metadata(&input_path)
        .with_context(|| format!("reading size of {}", input_path.display()))?
        .len();

    let partitions = partition_by(&loans, &config.year_column)?;
    let budget = RowBudget::estimate(
        file_bytes,
        loans.len(),
        partitions.len(),
        config.target_bytes,
    )?;
    log::info!(
        "~{:.1} bytes/row, budget {} rows, {} per year across {} years",
        budget.bytes_per_row,
        budget.max_total_rows,
        budget.n_per_year,
        budget.distinct_years
    );

    let (sampled, years) = stratified_sample(&loans, &partitions, budget.n_per_year, config.seed);

    write_csv(&sampled, &output_path)?;
    let output_bytes = std::fs::metadata(&output_path)
        .with_context(|| format!("reading size of {}", output_path.display()))?
        .len();

    Ok(SampleReport {
        budget,
        years,
        rows_written: sampled.len(),
        output_path,
        output_bytes,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fmt::Write as _;
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::error::SampleError;

    const HEADER: &str = "loannumber,borrname,borrstate,grossapproval,approvalfiscalyear";

    fn write_input(dir: &Path, counts: &[(&str, usize)]) -> SamplingConfig {
        let mut text = String::from(HEADER);
        text.push('\n');
        let mut id = 0;
        for (year, count) in counts {
            for _ in 0..*count {
                writeln!(text, "{id:07},Borrower {id},TX,{}.00,{year}", 100_000 + id).unwrap();
                id += 1;
            }
        }
        fs::write(dir.join("input.csv"), text).unwrap();

        SamplingConfig {
            data_dir: dir.to_path_buf(),
            input_name: "input.csv".into(),
            output_name: "output.csv".into(),
            year_column: "approvalfiscalyear".into(),
            target_bytes: 0,
            seed: 10,
        }
    }

    /// Ceiling that yields exactly `n_per_year` for the config's input.
    fn target_for(cfg: &SamplingConfig, rows: usize, years: usize, n_per_year: usize) -> u64 {
        let bytes = fs::metadata(cfg.input_path()).unwrap().len();
        let per_row = bytes as f64 / rows as f64;
        // Half a row of slack keeps float rounding from losing a row.
        (((n_per_year * years) as f64 + 0.5) * per_row).ceil() as u64
    }

    #[test]
    fn samples_quota_per_year_and_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[("2010", 100), ("2011", 50), ("2012", 10)]);
        cfg.target_bytes = target_for(&cfg, 160, 3, 40);

        let report = run(&cfg).unwrap();
        assert_eq!(report.budget.n_per_year, 40);
        assert_eq!(report.rows_written, 90);
        assert_eq!(
            report.years.iter().map(|y| y.sampled).collect::<Vec<_>>(),
            vec![40, 40, 10]
        );

        let written = fs::read_to_string(cfg.output_path()).unwrap();
        assert_eq!(report.output_bytes, written.len() as u64);
        assert!(written.starts_with(HEADER));
        assert_eq!(written.lines().count(), 91);

        let input = fs::read_to_string(cfg.input_path()).unwrap();
        let input_lines: HashSet<&str> = input.lines().skip(1).collect();
        let mut seen = HashSet::new();
        for line in written.lines().skip(1) {
            assert!(input_lines.contains(line), "row not in input: {line}");
            assert!(seen.insert(line), "duplicate row: {line}");
        }
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[("2015", 80), ("2016", 70)]);
        cfg.target_bytes = target_for(&cfg, 150, 2, 25);

        run(&cfg).unwrap();
        let first = fs::read(cfg.output_path()).unwrap();
        run(&cfg).unwrap();
        let second = fs::read(cfg.output_path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn year_spellings_and_missing_markers_count_as_one_year() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[("2015", 10), ("2015.0", 10), ("NA", 5)]);
        cfg.target_bytes = 10 * 1024 * 1024;

        let report = run(&cfg).unwrap();
        assert_eq!(report.budget.distinct_years, 1);
        assert_eq!(report.years.len(), 1);
        assert_eq!(report.years[0].available, 20);
        assert_eq!(report.rows_written, 20);
    }

    #[test]
    fn generous_ceiling_keeps_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[("2010", 7), ("2020", 3)]);
        cfg.target_bytes = 10 * 1024 * 1024;

        let report = run(&cfg).unwrap();
        assert_eq!(report.rows_written, 10);
    }

    #[test]
    fn header_only_input_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[]);
        cfg.target_bytes = 1024;

        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SampleError>(),
            Some(SampleError::EmptyInput)
        ));
        assert!(!cfg.output_path().exists());
    }

    #[test]
    fn all_null_years_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = write_input(dir.path(), &[("", 5)]);
        cfg.target_bytes = 1024;

        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SampleError>(),
            Some(SampleError::NoYears)
        ));
    }

    #[test]
    fn missing_input_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SamplingConfig {
            data_dir: dir.path().to_path_buf(),
            ..SamplingConfig::default()
        };
        let err = run(&cfg).unwrap_err();
        assert!(err.to_string().contains(&cfg.input_name));
    }
}
