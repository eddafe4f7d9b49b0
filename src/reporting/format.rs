use std::io::Write;
use serde::{Serialize, Deserialize};

use super::model::EnumerationReport;
use crate::error::SubhuntResult;

/// Report format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Header line followed by one subdomain per line
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Renders a report into a writer
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &EnumerationReport, out: &mut dyn Write) -> SubhuntResult<()>;

    fn supported_format(&self) -> ReportFormat;
}

/// Convert file extension to report format
pub fn extension_to_format(extension: &str) -> Option<ReportFormat> {
    match extension.to_lowercase().as_str() {
        "txt" | "text" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}
