pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod reporting;
pub mod utils;

// Re-export main types for easier access
pub use app::{App, EnumerateOptions, RunSettings};
pub use config::Config;
pub use core::{
    Invoker,
    RawOutput,
    SubdomainList
};
pub use error::{SubhuntError, SubhuntResult};
pub use reporting::{
    EnumerationReport,
    ReportFormat,
    Reporter
};
pub use utils::{ProcessRunner, TokioProcessRunner};
