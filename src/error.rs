//! Error types for splatsweep

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Splatsweep error types
#[derive(Error, Debug)]
pub enum Error {
    /// External trainer exited unsuccessfully; the remaining sweep is aborted
    #[error("training run '{experiment}' failed: {}\nAborting the remaining sweep", .code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}")))]
    TrainingFailed {
        /// Name of the experiment whose run failed
        experiment: String,
        /// Exit code of the child process, `None` when killed by a signal
        code: Option<i32>,
    },

    /// IO error (trainer could not be spawned)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
