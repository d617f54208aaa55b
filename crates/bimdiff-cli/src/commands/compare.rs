//! Compare command
//!
//! Usage: bimdiff compare <OLD> <NEW> [--format json|summary] [--critical] [--config <FILE>]

use bimdiff_core::critical::{
    classify_critical_with, render_critical_summary, CriticalChangeReport, CriticalConfig,
    DEFAULT_CONFIG,
};
use bimdiff_core::diff::{compare, render_comparison_summary, ComparisonResult};
use bimdiff_core::errors::ExError;
use bimdiff_core::model::Element;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Old snapshot (JSON array of elements)
    pub old: PathBuf,

    /// New snapshot (JSON array of elements)
    pub new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Also classify critical changes
    #[arg(long)]
    pub critical: bool,

    /// Critical sets (TOML); implies --critical
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Summary,
}

#[derive(Serialize)]
struct CompareOutput<'a> {
    comparison: &'a ComparisonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical: Option<&'a CriticalChangeReport>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), ExError> {
    let old: Vec<Element> = super::read_json(&args.old)?;
    let new: Vec<Element> = super::read_json(&args.new)?;

    let result = compare(&old, &new);

    let report = match (&args.config, args.critical) {
        (Some(path), _) => {
            let config = CriticalConfig::from_path(path)?;
            Some(classify_critical_with(&result, &config))
        }
        (None, true) => Some(classify_critical_with(&result, &*DEFAULT_CONFIG)),
        (None, false) => None,
    };

    let rendered = match args.format {
        OutputFormat::Json => super::to_json(&CompareOutput {
            comparison: &result,
            critical: report.as_ref(),
        })?,
        OutputFormat::Summary => {
            let mut summary = render_comparison_summary(&result);
            if let Some(report) = &report {
                summary.push('\n');
                summary.push_str(&render_critical_summary(report));
            }
            summary
        }
    };

    super::emit(&rendered, args.output.as_ref())
}
