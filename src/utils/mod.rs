pub mod shell;

pub use shell::{ProcessOutput, ProcessRunner, TokioProcessRunner};
