use std::path::PathBuf;

/// Output ceiling: 10 MiB.
pub const TARGET_BYTES: u64 = 10 * 1024 * 1024;
pub const OUTPUT_NAME: &str = "business_loans_2010_2025.csv";
pub const INPUT_NAME: &str = "foia-504-fy2010-present-asof-251231.csv";
pub const YEAR_COLUMN: &str = "approvalfiscalyear";
pub const SEED: u64 = 10;

/// Everything the pipeline needs to know, fixed at build time.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Directory holding both the input and the output file.
    pub data_dir: PathBuf,
    pub input_name: String,
    pub output_name: String,
    /// Column whose distinct values define the strata.
    pub year_column: String,
    pub target_bytes: u64,
    /// Every stratum is drawn with a fresh RNG seeded with this value.
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            data_dir: project_root().join("data"),
            input_name: INPUT_NAME.to_string(),
            output_name: OUTPUT_NAME.to_string(),
            year_column: YEAR_COLUMN.to_string(),
            target_bytes: TARGET_BYTES,
            seed: SEED,
        }
    }
}

impl SamplingConfig {
    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input_name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_name)
    }
}

/// The crate directory, resolved at compile time.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
