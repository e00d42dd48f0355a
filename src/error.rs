use thiserror::Error;

/// Failures that escape the value layer.
///
/// Ordinary absence of a value is never an error here; it is an unset value.
/// Only misuse (reading past the end of a sequence), tooling boundaries
/// (descriptor parsing, configuration) and the concurrency collaborators
/// report through this type.
#[derive(Error, Debug)]
pub enum TristateError {
    #[error("No such element")]
    NoSuchElement,
    #[error("Parse error: {message}")]
    Parse { message: String, line: Option<usize>, col: Option<usize> },
    #[error("Specialization error: {0}")]
    Specialization(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Worker pool is shut down")]
    PoolClosed,
    #[error("Task failed: {0}")]
    TaskFailed(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, TristateError>;

// Helper conversions
impl From<config::ConfigError> for TristateError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

/// Readable text from a caught panic payload.
pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}
