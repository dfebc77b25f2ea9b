//! Error types for bundle packaging.
//!
//! Every filesystem failure carries the operation and the path that failed,
//! so the user can tell which step of the pipeline stopped the run.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building and assembling an application bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// The toolchain build step reported failure.
    #[error("{toolchain} build failed ({})", describe_exit(.code))]
    BuildFailed {
        /// Toolchain name (e.g. "swift")
        toolchain: String,
        /// Exit code of the build process, `None` if it was killed by a signal
        code: Option<i32>,
    },

    /// The toolchain program could not be located.
    #[error("`{program}` not found: {reason}")]
    ToolNotFound {
        /// Program that was looked up
        program: String,
        /// Lookup failure
        reason: String,
    },

    /// A toolchain query (e.g. bin path lookup) failed.
    #[error("`{command}` failed: {stderr}")]
    QueryFailed {
        /// Command line that was run
        command: String,
        /// Captured standard error
        stderr: String,
    },

    /// The toolchain reported success but the binary is missing.
    #[error("compiled binary not found at {}", .0.display())]
    BinaryNotFound(PathBuf),

    /// A filesystem operation failed.
    #[error("failed {context} {}: {source}", .path.display())]
    Fs {
        /// Operation being performed
        context: String,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid bundler configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Info.plist serialization failed.
    #[error("Info.plist error: {0}")]
    Plist(#[from] plist::Error),

    /// JSON parsing failed (toolchain metadata).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal failed.
    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix mismatch during recursive copy.
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Attaches a plain-text context message to an error or a missing value.
pub trait Context<T> {
    /// Wraps the failure with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Wraps the failure with a lazily built context.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::GenericError(format!("{}: {e}", f())))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Attaches the failing operation and path to I/O errors.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`].
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
