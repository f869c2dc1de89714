use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use speed_threshold_core::{CalcError, SpeedBreakdown};

use crate::form::result_message;

pub const ERROR_TITLE: &str = "Input error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary with the working shown
    Console,
    /// Just the result line
    Plain,
    /// Machine-readable JSON
    Json,
    /// Markdown table
    Markdown,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonReport<'a> {
    Ok {
        message: String,
        #[serde(flatten)]
        breakdown: &'a SpeedBreakdown,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

const fn error_kind(err: &CalcError) -> &'static str {
    match err {
        CalcError::Parse { .. } => "parse",
        CalcError::Validation(_) => "validation",
    }
}

pub fn write_success(
    out: &mut dyn Write,
    format: ReportFormat,
    breakdown: &SpeedBreakdown,
) -> Result<()> {
    match format {
        ReportFormat::Console => generate_console_report(out, breakdown)?,
        ReportFormat::Plain => writeln!(out, "{}", result_message(breakdown.threshold))?,
        ReportFormat::Json => {
            let report = JsonReport::Ok {
                message: result_message(breakdown.threshold),
                breakdown,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        ReportFormat::Markdown => generate_markdown_report(out, breakdown)?,
    }
    Ok(())
}

/// Render a failed calculation. Structured formats go to `out`; console and
/// plain go to `err_out` so stdout stays clean.
pub fn write_failure(
    out: &mut dyn Write,
    err_out: &mut dyn Write,
    format: ReportFormat,
    err: &CalcError,
) -> Result<()> {
    match format {
        ReportFormat::Json => {
            let report = JsonReport::Error {
                kind: error_kind(err),
                message: err.to_string(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        ReportFormat::Markdown => {
            writeln!(out, "## {ERROR_TITLE}\n\n{err}")?;
        }
        ReportFormat::Console | ReportFormat::Plain => {
            writeln!(err_out, "{}: {err}", ERROR_TITLE.red().bold())?;
        }
    }
    Ok(())
}

fn generate_console_report(out: &mut dyn Write, breakdown: &SpeedBreakdown) -> Result<()> {
    writeln!(out, "{}", "⚡ Speed Threshold".bright_cyan().bold())?;
    writeln!(out, "{}", "=================".cyan())?;
    writeln!(out, "Mode: {}", breakdown.mode)?;
    writeln!(out, "Target actions: {}", breakdown.target_action_count)?;
    writeln!(out, "Action value: {}", breakdown.action_value)?;
    writeln!(out, "Advance total: {:.2}", breakdown.advance_total)?;
    writeln!(out)?;
    let line = result_message(breakdown.threshold);
    if breakdown.is_non_positive() {
        writeln!(out, "{}", line.yellow().bold())?;
        writeln!(out, "   Advances alone already cover the requested actions.")?;
    } else {
        writeln!(out, "{}", line.green().bold())?;
    }
    Ok(())
}

fn generate_markdown_report(out: &mut dyn Write, breakdown: &SpeedBreakdown) -> Result<()> {
    writeln!(out, "# Speed Threshold\n")?;
    writeln!(out, "| Input | Value |")?;
    writeln!(out, "| --- | --- |")?;
    writeln!(out, "| Mode | {} |", breakdown.mode)?;
    writeln!(out, "| Target actions | {} |", breakdown.target_action_count)?;
    writeln!(out, "| Action value | {} |", breakdown.action_value)?;
    for (idx, advance) in breakdown.custom_advances.iter().enumerate() {
        writeln!(out, "| Custom {} | {advance} |", idx + 1)?;
    }
    writeln!(out, "| Advance total | {:.2} |", breakdown.advance_total)?;
    writeln!(out)?;
    writeln!(out, "**{}**", result_message(breakdown.threshold))?;
    Ok(())
}
