use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubhuntError {
    #[error("Executable not found: {path:?} - {reason}")]
    ExecutableNotFound {
        path: PathBuf,
        reason: String,
    },

    #[error("Child process failed: {tool} exited with {}", describe_code(.code))]
    ChildProcessFailure {
        tool: String,
        code: Option<i32>,
    },

    #[error("Execution error: {tool} - {message}")]
    Execution {
        tool: String,
        message: String,
    },

    #[error("Timeout error: {tool} exceeded {seconds} seconds")]
    Timeout {
        tool: String,
        seconds: u64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status code {}", code),
        None => "no status code (terminated by signal)".to_string(),
    }
}

pub type SubhuntResult<T> = std::result::Result<T, SubhuntError>;
