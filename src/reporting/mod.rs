mod format;
mod model;
pub mod formats;

use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

pub use model::EnumerationReport;
pub use formats::{ReportFormat, ReportRenderer, extension_to_format};
pub use formats::text::{TextReportRenderer, DEFAULT_HEADER};
pub use formats::json::JsonReportRenderer;

use crate::error::{SubhuntResult, SubhuntError};

/// Prints enumeration results in the selected format
pub struct Reporter {
    renderers: HashMap<ReportFormat, Box<dyn ReportRenderer>>,
    format: ReportFormat,
}

impl Reporter {
    /// Create a reporter with the built-in renderers
    pub fn new(format: ReportFormat, header: impl Into<String>) -> Self {
        let mut reporter = Self {
            renderers: HashMap::new(),
            format,
        };

        reporter.register_renderer(Box::new(TextReportRenderer::new(header)));
        reporter.register_renderer(Box::new(JsonReportRenderer::new()));

        reporter
    }

    /// Register a renderer, replacing any existing one for the same format
    pub fn register_renderer(&mut self, renderer: Box<dyn ReportRenderer>) {
        let format = renderer.supported_format();
        debug!("Registering report renderer for format: {:?}", format);
        self.renderers.insert(format, renderer);
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Write `report` to `out`
    pub fn report(&self, report: &EnumerationReport, out: &mut dyn Write) -> SubhuntResult<()> {
        let renderer = self.renderers.get(&self.format)
            .ok_or_else(|| SubhuntError::InvalidInput(format!("No renderer for format {:?}", self.format)))?;

        debug!("Rendering {} subdomains as {:?}", report.total, self.format);
        renderer.render(report, out)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportFormat::Text, DEFAULT_HEADER)
    }
}
