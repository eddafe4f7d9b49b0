pub mod json;
pub mod text;

pub use super::format::{ReportFormat, ReportRenderer, extension_to_format};
