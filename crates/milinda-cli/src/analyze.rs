//! `analyze` command handler.

use std::path::PathBuf;

use milinda_analyzer::{analyze_file, AnalyzerConfig, TextReport};
use milinda_core::TextEncoding;

#[derive(Debug, Clone)]
pub(crate) struct AnalyzeOptions {
    pub path: PathBuf,
    pub encoding: TextEncoding,
    pub top_n: usize,
    pub json: bool,
}

/// Analyze one file and print the report to stdout.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub(crate) fn run_analyze(options: &AnalyzeOptions) -> anyhow::Result<()> {
    let config = AnalyzerConfig {
        encoding: options.encoding,
        top_n: options.top_n,
    };
    let report = analyze_file(&options.path, &config)?;
    print!("{}", format_report(&report, options.json)?);
    Ok(())
}

pub(crate) fn format_report(report: &TextReport, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report.render())
    }
}
