//! Writes a synthetic FOIA-504-shaped loan table to the sampler's input path
//! so the pipeline can run without the real download.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared with the sampler so both agree on where the input lives.
#[path = "../config.rs"]
#[allow(dead_code)]
mod config;

use config::SamplingConfig;

const HEADER: [&str; 9] = [
    "loannumber",
    "borrname",
    "borrcity",
    "borrstate",
    "approvaldate",
    "approvalfiscalyear",
    "grossapproval",
    "jobssupported",
    "loanstatus",
];

const NAME_STEMS: [&str; 8] = [
    "Harbor", "Summit", "Pioneer", "Cedar", "Lakeside", "Granite", "Prairie", "Riverside",
];
const NAME_KINDS: [&str; 6] = [
    "Dental Group",
    "Holdings, LLC",
    "Bakery & Cafe",
    "Machine Works",
    "Properties",
    "Veterinary Clinic",
];
const CITIES: [(&str, &str); 6] = [
    ("Austin", "TX"),
    ("Denver", "CO"),
    ("Columbus", "OH"),
    ("Sacramento", "CA"),
    ("Raleigh", "NC"),
    ("Boise", "ID"),
];
const STATUSES: [&str; 4] = ["PIF", "EXEMPT", "CHGOFF", "CANCLD"];

/// Uneven stratum sizes: volume grows through the decade, the current
/// fiscal year is only partly reported.
fn loans_in_year(fy: u16) -> usize {
    match fy {
        2025 => 900,
        _ => 2_000 + 350 * usize::from(fy - 2010),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let path = SamplingConfig::default().input_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(HEADER)?;

    let mut loan_number: u64 = 3_000_000;
    for fy in 2010u16..=2025 {
        let count = loans_in_year(fy);
        for _ in 0..count {
            let name = format!(
                "{} {}",
                NAME_STEMS[rng.random_range(0..NAME_STEMS.len())],
                NAME_KINDS[rng.random_range(0..NAME_KINDS.len())]
            );
            let (city, state) = CITIES[rng.random_range(0..CITIES.len())];
            // Federal fiscal year starts in October of the previous year.
            let (cal_year, month) = match rng.random_range(1..=12u8) {
                m @ 10..=12 => (fy - 1, m),
                m => (fy, m),
            };
            let date = format!("{month:02}/{:02}/{cal_year}", rng.random_range(1..=28u8));
            let gross = rng.random_range(125u32..=5_500) * 1_000;
            let jobs = rng.random_range(0u32..=120);
            let status = STATUSES[rng.random_range(0..STATUSES.len())];

            writer.write_record([
                loan_number.to_string(),
                name,
                city.to_string(),
                state.to_string(),
                date,
                fy.to_string(),
                format!("{gross}.00"),
                jobs.to_string(),
                status.to_string(),
            ])?;
            loan_number += 7;
        }
        log::debug!("fy{fy}: {count} loans");
    }
    writer.flush().context("flushing generated CSV")?;

    println!(
        "Wrote {} loans to {}",
        (loan_number - 3_000_000) / 7,
        path.display()
    );
    Ok(())
}
