use std::io::Write;

use crate::error::SubhuntResult;
use crate::reporting::model::EnumerationReport;
use crate::reporting::formats::{ReportFormat, ReportRenderer};

/// Default header printed before the subdomains
pub const DEFAULT_HEADER: &str = "Subdomains found:";

/// Plain-text renderer: a header line, then one subdomain per line
pub struct TextReportRenderer {
    header: String,
}

impl TextReportRenderer {
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }
}

impl Default for TextReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}

impl ReportRenderer for TextReportRenderer {
    fn render(&self, report: &EnumerationReport, out: &mut dyn Write) -> SubhuntResult<()> {
        writeln!(out, "{}", self.header)?;
        for subdomain in report.subdomains.iter() {
            writeln!(out, "{}", subdomain)?;
        }
        out.flush()?;
        Ok(())
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
