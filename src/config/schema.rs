use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use crate::reporting::ReportFormat;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub tool: ToolConfig,
    pub output: OutputConfig,
}

/// External enumeration tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub executable: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// How results are rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub header: String,
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: ToolConfig {
                executable: PathBuf::from("./subfinder"),
                timeout_seconds: None,
            },
            output: OutputConfig {
                header: "Subdomains found:".to_string(),
                format: ReportFormat::Text,
            },
        }
    }
}
