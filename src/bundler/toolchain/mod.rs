//! External compiler toolchains.
//!
//! A toolchain exposes two operations to the packager: *build for a
//! configuration* and *report the directory holding the compiled binary for
//! that configuration*. The bin directory is always taken from the toolchain
//! itself (or, for custom toolchains, from explicit configuration), never
//! re-derived by the packager.

mod cargo;
mod custom;
mod swift;

use crate::bundler::error::{Error, Result};
use serde::Deserialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Toolchain selector as written in `Bundle.toml` or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainKind {
    /// Swift Package Manager (`swift build`)
    Swift,
    /// Cargo (`cargo build`)
    Cargo,
    /// User-supplied build command with an explicit bin directory
    Custom,
}

impl fmt::Display for ToolchainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Swift => "swift",
            Self::Cargo => "cargo",
            Self::Custom => "custom",
        })
    }
}

/// A configured toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toolchain {
    /// `swift build -c <configuration>`
    Swift,
    /// `cargo build --profile <configuration> --bin <binary>`
    Cargo,
    /// Arbitrary build command; the binary is expected in `bin_dir`.
    Custom {
        /// Program followed by its arguments
        command: Vec<String>,
        /// Directory the command writes the binary to
        bin_dir: PathBuf,
    },
}

/// Inputs shared by the build and bin-path operations.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// Resolved path of the toolchain program
    pub program: &'a Path,
    /// Directory the toolchain runs in
    pub project_dir: &'a Path,
    /// Build configuration (e.g. "release")
    pub configuration: &'a str,
    /// Binary (product) name
    pub binary: &'a str,
}

impl Toolchain {
    /// Builds a toolchain from its selector.
    ///
    /// `command` and `bin_dir` are only meaningful for
    /// [`ToolchainKind::Custom`], which requires both.
    pub fn from_kind(
        kind: ToolchainKind,
        command: Vec<String>,
        bin_dir: Option<PathBuf>,
    ) -> Result<Self> {
        match kind {
            ToolchainKind::Swift | ToolchainKind::Cargo => {
                if !command.is_empty() {
                    return Err(Error::Config(format!(
                        "a build command is only used by the custom toolchain, not {kind}"
                    )));
                }
                if let Some(dir) = bin_dir {
                    log::warn!(
                        "Ignoring bin_dir {}: the {} toolchain reports its own bin path",
                        dir.display(),
                        kind
                    );
                }
                Ok(if kind == ToolchainKind::Swift {
                    Self::Swift
                } else {
                    Self::Cargo
                })
            }
            ToolchainKind::Custom => {
                if command.first().is_none_or(|program| program.is_empty()) {
                    return Err(Error::Config(
                        "the custom toolchain requires a build command".into(),
                    ));
                }
                let bin_dir = bin_dir.ok_or_else(|| {
                    Error::Config("the custom toolchain requires a bin_dir".into())
                })?;
                Ok(Self::Custom { command, bin_dir })
            }
        }
    }

    /// Returns the selector for this toolchain.
    pub fn kind(&self) -> ToolchainKind {
        match self {
            Self::Swift => ToolchainKind::Swift,
            Self::Cargo => ToolchainKind::Cargo,
            Self::Custom { .. } => ToolchainKind::Custom,
        }
    }

    /// Program that has to be on `PATH` (or exist) for this toolchain.
    pub fn program(&self) -> &str {
        match self {
            Self::Swift => "swift",
            Self::Cargo => "cargo",
            Self::Custom { command, .. } => command.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Runs the build for `request.configuration`.
    ///
    /// Compiler output is passed through to the terminal. A non-zero exit
    /// status becomes [`Error::BuildFailed`].
    pub async fn build(&self, request: &BuildRequest<'_>) -> Result<()> {
        match self {
            Self::Swift => swift::build(request).await,
            Self::Cargo => cargo::build(request).await,
            Self::Custom { command, .. } => custom::build(command, request).await,
        }
    }

    /// Asks the toolchain where the binary for `request.configuration` lives.
    pub async fn bin_dir(&self, request: &BuildRequest<'_>) -> Result<PathBuf> {
        match self {
            Self::Swift => swift::bin_dir(request).await,
            Self::Cargo => cargo::bin_dir(request).await,
            Self::Custom { bin_dir, .. } => Ok(bin_dir.clone()),
        }
    }
}

/// Runs a build command to completion with inherited stdio.
async fn run_build<I, S>(kind: ToolchainKind, request: &BuildRequest<'_>, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(request.program);
    command
        .args(args)
        .current_dir(request.project_dir)
        .stdin(Stdio::null());

    log::debug!("Running {:?} in {}", command, request.project_dir.display());

    let status = command.status().await.map_err(|e| {
        Error::GenericError(format!(
            "Failed to execute {}: {}",
            request.program.display(),
            e
        ))
    })?;

    if !status.success() {
        return Err(Error::BuildFailed {
            toolchain: kind.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}

/// Runs a toolchain query and returns its trimmed standard output.
async fn query<I, S>(request: &BuildRequest<'_>, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(request.program);
    command
        .args(args)
        .current_dir(request.project_dir)
        .stdin(Stdio::null());

    log::debug!("Querying {:?}", command);

    let output = command.output().await.map_err(|e| {
        Error::GenericError(format!(
            "Failed to execute {}: {}",
            request.program.display(),
            e
        ))
    })?;

    if !output.status.success() {
        return Err(Error::QueryFailed {
            command: format!("{:?}", command.as_std()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
