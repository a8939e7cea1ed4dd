//! Text and JSON renderings of a session report.

use crate::session::{Outcome, Report};
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// One line per step that produced a value or an error.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for step in &report.steps {
        match &step.outcome {
            Outcome::Ok { value: Some(value) } => {
                let _ = writeln!(out, "{value}");
            }
            Outcome::Ok { value: None } => {}
            Outcome::Error { message } => {
                let _ = writeln!(out, "error: line {}: {message}", step.line);
            }
        }
    }
    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
