use serde::Serialize;

use crate::error::Result;
use crate::path_utils::display_path;
use crate::runner::{BatchReport, Mode, Outcome, RunVerdict, Summary, TargetOutcome};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    mode: Mode,
    verdict: RunVerdict,
    summary: Summary,
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<FileError>,
}

#[derive(Serialize)]
struct FileError {
    kind: &'static str,
    message: String,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let output = JsonOutput {
            mode: report.mode(),
            verdict: report.verdict(),
            summary: report.summary(),
            results: report.results().iter().map(convert_result).collect(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

fn convert_result(result: &TargetOutcome) -> FileResult {
    FileResult {
        path: display_path(result.target.path()),
        extension: result.target.extension().map(str::to_string),
        status: result.outcome.label(),
        error: match &result.outcome {
            Outcome::Failed(reason) => Some(FileError {
                kind: reason.kind(),
                message: reason.to_string(),
            }),
            _ => None,
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
