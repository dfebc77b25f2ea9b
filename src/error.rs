//! Application-level error types.
//!
//! [`BundlerError`] is what the command line surface returns; it knows the
//! process exit code each failure maps to.

use thiserror::Error;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundle.toml parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Conflicting arguments
    #[error("Conflicting arguments: {arguments:?}")]
    ConflictingArguments {
        /// Arguments that conflict
        arguments: Vec<String>,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// A failed build exits with the toolchain's own code; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Bundler(crate::bundler::Error::BuildFailed { code, .. }) => {
                code.filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        match self {
            Self::Bundler(Error::BuildFailed { .. }) => vec![
                "Fix the compiler errors above; the bundle was not modified".to_string(),
            ],
            Self::Bundler(Error::ToolNotFound { program, .. }) => vec![
                format!("Install `{program}` or add it to PATH"),
                "Select another toolchain with --toolchain".to_string(),
            ],
            Self::Bundler(Error::BinaryNotFound(_)) => vec![
                "Set --binary if the product name differs from the application name".to_string(),
            ],
            Self::Bundler(Error::Fs { .. }) => vec![
                "Check permissions and free space; the bundle may be partially updated"
                    .to_string(),
            ],
            Self::Toml(_) | Self::Bundler(Error::Config(_)) => {
                vec!["Check Bundle.toml and the command line flags".to_string()]
            }
            _ => Vec::new(),
        }
    }
}
