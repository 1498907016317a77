//! Error types.
//!
//! - `ScanError`: typed failures raised by the physics lookups, the grid loader and
//!   the renderer.
//! - `AppError`: what the binary reports; carries the process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the core scan computations.
///
/// None of these are recovered locally: a failed lookup aborts the whole plot or
/// aggregation and is handed back to the caller.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unknown process name '{0}'")]
    UnknownProcess(String),

    #[error("unknown plot type '{0}'")]
    UnknownPlotType(String),

    #[error("mass {mass} out of range for process {process}")]
    MassOutOfRange { mass: f64, process: String },

    #[error("total event count is zero, cannot average efficiency for {process}")]
    EmptyAggregation { process: String },

    #[error("grid contains no mass points")]
    EmptyGrid,

    #[error("invalid mass point: {0}")]
    InvalidMassPoint(String),

    #[error("failed to render '{}': {message}", path.display())]
    Render { path: PathBuf, message: String },

    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Exit code used when this error terminates the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScanError::UnknownProcess(_)
            | ScanError::UnknownPlotType(_)
            | ScanError::MassOutOfRange { .. }
            | ScanError::InvalidMassPoint(_)
            | ScanError::Io { .. } => 2,
            ScanError::EmptyAggregation { .. } | ScanError::EmptyGrid => 3,
            ScanError::Render { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
