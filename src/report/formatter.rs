// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console summary of a generate run

use super::output::GenerateOutcome;
use crate::locale;
use crate::types::ExtractReport;
use colored::*;

pub struct ReportFormatter {
    quiet: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn print(&self, report: &ExtractReport, outcome: &GenerateOutcome) {
        if !self.quiet {
            self.print_locales(report);
            println!();
        }

        println!(
            "{} {}",
            "SQL generated successfully:".green().bold(),
            outcome.script_path.display()
        );
        println!("Total statements: {}", outcome.statements);
        println!("Total rows: {}", outcome.rows);

        if !outcome.chunk_paths.is_empty() {
            println!("Split into {} chunks:", outcome.chunk_paths.len());
            for path in &outcome.chunk_paths {
                println!("  {}", path.display());
            }
        }
        for line in self.warning_lines(report) {
            println!("{}", line.yellow());
        }
    }

    /// Quiet runs suppress the log output, so the warnings are listed here instead.
    fn warning_lines(&self, report: &ExtractReport) -> Vec<String> {
        let count = report.warnings.len();
        if count == 0 {
            return Vec::new();
        }
        if !self.quiet {
            return vec![format!("{} warnings, see above", count)];
        }
        let mut lines = vec![format!("{} warnings:", count)];
        lines.extend(report.warnings.iter().map(|w| format!("  {}", w)));
        lines
    }

    fn print_locales(&self, report: &ExtractReport) {
        println!("{}", "LOCALES".bold().cyan());
        for stats in &report.locales {
            let name = locale::display_name(&stats.locale).unwrap_or("unknown");
            if !stats.found {
                println!("  {:<6} {:<12} {}", stats.locale, name, "not found".red());
                continue;
            }
            println!(
                "  {:<6} {:<12} {:>5} rows  {:>2} sections  {} templates skipped",
                stats.locale,
                name,
                stats.rows,
                stats.sections_read,
                stats.skipped_templates.to_string().dimmed()
            );
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractWarning;
    use std::path::PathBuf;

    fn report_with_warnings(warnings: Vec<ExtractWarning>) -> ExtractReport {
        ExtractReport {
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            root: PathBuf::from("."),
            locales: vec![],
            warnings,
            rows: vec![],
        }
    }

    fn missing_de() -> ExtractWarning {
        ExtractWarning::MissingLocaleFile {
            locale: "de".to_string(),
            path: PathBuf::from("public/locales/de/common.json"),
        }
    }

    #[test]
    fn quiet_summary_lists_each_warning() {
        let report = report_with_warnings(vec![missing_de()]);
        let lines = ReportFormatter::new().quiet(true).warning_lines(&report);
        assert_eq!(
            lines,
            vec![
                "1 warnings:".to_string(),
                "  public/locales/de/common.json not found".to_string(),
            ]
        );
    }

    #[test]
    fn normal_summary_points_at_log_output() {
        let report = report_with_warnings(vec![missing_de()]);
        let lines = ReportFormatter::new().warning_lines(&report);
        assert_eq!(lines, vec!["1 warnings, see above".to_string()]);
    }

    #[test]
    fn no_warnings_no_lines() {
        let report = report_with_warnings(vec![]);
        assert!(ReportFormatter::new().quiet(true).warning_lines(&report).is_empty());
    }
}
