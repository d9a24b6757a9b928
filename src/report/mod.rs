// SPDX-License-Identifier: PMPL-1.0-or-later

//! Output of a generate run: files on disk and the console summary

pub mod formatter;
pub mod output;

use crate::config::SeedConfig;
use crate::extract;
use crate::types::ExtractReport;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::{write_json, write_run_report, write_script, GenerateOutcome};

/// Extract rows for every locale and write the script (and chunks) under `root`.
pub fn generate(
    config: &SeedConfig,
    root: &Path,
    split: bool,
) -> Result<(ExtractReport, GenerateOutcome)> {
    let report = extract::run(config, root)?;
    let chunk_size = split.then_some(config.chunk_size);
    let outcome = write_script(&report, &config.output_path(root), chunk_size)?;
    Ok((report, outcome))
}

/// Print the summary to the console
pub fn print_summary(report: &ExtractReport, outcome: &GenerateOutcome, quiet: bool) {
    ReportFormatter::new().quiet(quiet).print(report, outcome);
}
