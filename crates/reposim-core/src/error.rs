//! Error types and exit codes for reposim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid patterns)
//! - 3: Data error (missing directories, too few repositories to compare)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing inputs, insufficient repositories (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during reposim operations
#[derive(Error, Debug)]
pub enum ReposimError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("only {found} repositories matched under {root:?} (need at least 2)")]
    InsufficientRepositories { found: usize, root: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ReposimError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ReposimError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ReposimError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        ReposimError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReposimError::UsageError(_)
            | ReposimError::InvalidValue { .. } => ExitCode::Usage,

            ReposimError::InsufficientRepositories { .. } | ReposimError::NotFound { .. } => {
                ExitCode::Data
            }

            ReposimError::Io(_)
            | ReposimError::Json(_)
            | ReposimError::Toml(_)
            | ReposimError::FailedOperationWithTarget { .. }
            | ReposimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ReposimError::UsageError(_) => "usage_error",
            ReposimError::InvalidValue { .. } => "invalid_value",
            ReposimError::InsufficientRepositories { .. } => "insufficient_repositories",
            ReposimError::NotFound { .. } => "not_found",
            ReposimError::Io(_) => "io_error",
            ReposimError::Json(_) => "json_error",
            ReposimError::Toml(_) => "toml_error",
            ReposimError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ReposimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let ReposimError::InsufficientRepositories { found, .. } = self {
            error_obj["found"] = serde_json::json!(found);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for reposim operations
pub type Result<T> = std::result::Result<T, ReposimError>;
