use std::path::Path;
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

use crate::core::SubdomainList;

/// Result of one enumeration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationReport {
    pub domain: String,
    pub tool: String,
    pub subdomains: SubdomainList,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl EnumerationReport {
    pub fn new(
        domain: &str,
        tool: &Path,
        subdomains: SubdomainList,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let duration_ms = (finished_at - started_at)
            .num_milliseconds()
            .max(0) as u64;

        Self {
            domain: domain.to_string(),
            tool: tool.display().to_string(),
            total: subdomains.len(),
            subdomains,
            started_at,
            finished_at,
            duration_ms,
        }
    }
}
