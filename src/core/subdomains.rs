// src/core/subdomains.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use tracing::debug;

/// Everything the enumeration tool wrote to stdout, decoded as UTF-8
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawOutput(String);

impl RawOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode captured bytes. Invalid UTF-8 sequences become U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subdomains in the order the tool reported them. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubdomainList(Vec<String>);

impl SubdomainList {
    /// Split raw tool output into lines.
    ///
    /// Trailing whitespace is trimmed from the whole output and from every
    /// line, so a final newline does not produce an empty entry. Empty output
    /// is *not* special-cased: it yields a single empty entry.
    pub fn from_raw(raw: &RawOutput) -> Self {
        let trimmed = raw.as_str().trim_end();
        if trimmed.is_empty() {
            debug!("Tool produced no output; keeping a single empty entry");
        }

        Self(
            trimmed
                .split('\n')
                .map(|line| line.trim_end().to_string())
                .collect()
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SubdomainList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for SubdomainList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
