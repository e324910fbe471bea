mod config;
mod data;
mod error;
mod pipeline;

use anyhow::Result;

use config::SamplingConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = SamplingConfig::default();
    let report = pipeline::run(&config)?;

    for y in &report.years {
        println!("{} {} (sampled {})", y.year, y.available, y.sampled);
    }
    log::info!(
        "quota {} rows/year at ~{:.1} bytes/row",
        report.budget.n_per_year,
        report.budget.bytes_per_row
    );

    let name = report
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "Saved {} rows → {name}  ({:.2} MB)",
        thousands(report.rows_written),
        report.output_mb()
    );
    Ok(())
}

/// `1234567` → `"1,234,567"`.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
