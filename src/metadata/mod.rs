//! Project configuration from `Bundle.toml`.
//!
//! Every key is optional; absent keys fall back to command line flags and
//! then to the built-in defaults.
//!
//! ```toml
//! name = "Pensive"
//! identifier = "com.example.pensive"
//! version = "1.2.0"
//! toolchain = "swift"
//! configuration = "release"
//! resources = "Resources"
//! output_dir = "dist"
//! info_plist = true
//!
//! [macos]
//! minimum_system_version = "13.0"
//! ```

use crate::bundler::{MacOsSettings, ToolchainKind};
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the manifest looked up in the project directory.
pub const MANIFEST_FILE_NAME: &str = "Bundle.toml";

/// Parsed contents of `Bundle.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleManifest {
    /// Application name
    pub name: Option<String>,

    /// Binary file name, when it differs from the application name
    pub binary: Option<String>,

    /// CFBundleIdentifier
    pub identifier: Option<String>,

    /// CFBundleVersion
    pub version: Option<String>,

    /// Toolchain selector
    pub toolchain: Option<ToolchainKind>,

    /// Build configuration
    pub configuration: Option<String>,

    /// Resources source directory
    pub resources: Option<PathBuf>,

    /// Directory the `.app` is written to
    pub output_dir: Option<PathBuf>,

    /// Bin directory for the custom toolchain
    pub bin_dir: Option<PathBuf>,

    /// Build command for the custom toolchain
    pub build_command: Option<Vec<String>>,

    /// Write Info.plist
    pub info_plist: Option<bool>,

    /// `[macos]` table
    pub macos: Option<MacOsSettings>,
}

/// Loads the manifest at `path`.
///
/// A missing file yields `Ok(None)` unless `required` is set, in which case
/// it is an error (used for an explicit `--config`).
pub fn load_manifest(path: &Path, required: bool) -> Result<Option<BundleManifest>> {
    if !path.exists() {
        if required {
            return Err(BundlerError::Cli(CliError::InvalidArguments {
                reason: format!("config file not found: {}", path.display()),
            }));
        }
        log::debug!("No manifest at {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let manifest = parse_manifest(&contents)?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(Some(manifest))
}

/// Parses manifest text.
pub fn parse_manifest(contents: &str) -> Result<BundleManifest> {
    Ok(toml::from_str(contents)?)
}
