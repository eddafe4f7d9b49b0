use std::io::Write;

use crate::error::{SubhuntResult, SubhuntError};
use crate::reporting::model::EnumerationReport;
use crate::reporting::formats::{ReportFormat, ReportRenderer};

/// JSON report renderer
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &EnumerationReport, out: &mut dyn Write) -> SubhuntResult<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| SubhuntError::SerializationError(format!("Failed to serialize report: {}", e)))?;
        writeln!(out, "{}", json)?;
        Ok(())
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
