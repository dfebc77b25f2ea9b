//! Application bundle packager.
//!
//! Builds an application with an external toolchain (Swift Package Manager,
//! Cargo or a custom command) and assembles a macOS `.app` bundle from the
//! compiled binary and a resources directory.
//!
//! It can be used both as a CLI tool and as a library dependency; see
//! [`bundler`] for the library entry point.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
