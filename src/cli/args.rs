//! Command line argument parsing and settings resolution.
//!
//! Flags override `Bundle.toml`, which overrides the built-in defaults.

use crate::bundler::{
    MacOsSettings, PackageSettings, Settings, SettingsBuilder, Toolchain, ToolchainKind,
};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::{self, BundleManifest, MANIFEST_FILE_NAME};
use clap::Parser;
use std::path::PathBuf;

/// macOS application bundle packager
#[derive(Parser, Debug)]
#[command(
    name = "app_bundler",
    version,
    about = "Builds an application and packages it as a macOS .app bundle",
    long_about = "Builds an application with its toolchain and packages the binary and its resources \
as a macOS .app bundle (<name>.app/Contents/{MacOS,Resources}).

With no arguments, runs `swift build -c release` in the current directory and writes Pensive.app.

Usage:
  app_bundler
  app_bundler --name MyApp --toolchain cargo --configuration release
  app_bundler --toolchain custom --bin-dir build -- make app

Settings are read from Bundle.toml in the project directory when present; flags take precedence.
Exit code 0 = bundle populated. A failed build exits with the toolchain's exit code."
)]
pub struct Args {
    /// Project directory the toolchain runs in
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file (default: <project-dir>/Bundle.toml, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Application name; names the bundle and its executable
    #[arg(short, long, env = "APP_BUNDLE_NAME")]
    pub name: Option<String>,

    /// Binary file name produced by the toolchain (default: application name)
    #[arg(long)]
    pub binary: Option<String>,

    /// Build configuration passed to the toolchain
    #[arg(short, long, env = "APP_BUNDLE_CONFIGURATION")]
    pub configuration: Option<String>,

    /// Toolchain used to build the binary
    #[arg(short, long, value_enum)]
    pub toolchain: Option<ToolchainKind>,

    /// Resources source directory (default: Resources)
    #[arg(short, long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Directory the .app bundle is written to (default: project directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory holding the compiled binary (custom toolchain only)
    #[arg(long, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Bundle identifier (CFBundleIdentifier)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Bundle version (CFBundleVersion)
    #[arg(long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Do not write Contents/Info.plist
    #[arg(long)]
    pub no_info_plist: bool,

    /// Show extra detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Build command for the custom toolchain
    #[arg(last = true, value_name = "BUILD_COMMAND")]
    pub build_command: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), CliError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(CliError::InvalidArguments {
                reason: "Application name cannot be empty".to_string(),
            });
        }

        let builtin = self
            .toolchain
            .filter(|kind| *kind != ToolchainKind::Custom);
        if let Some(kind) = builtin {
            if !self.build_command.is_empty() {
                return Err(CliError::ConflictingArguments {
                    arguments: vec![format!("--toolchain {kind}"), "-- <BUILD_COMMAND>".to_string()],
                });
            }
            if self.bin_dir.is_some() {
                return Err(CliError::ConflictingArguments {
                    arguments: vec![format!("--toolchain {kind}"), "--bin-dir".to_string()],
                });
            }
        }

        Ok(())
    }

    /// Loads `Bundle.toml` (if any) and merges it with the flags.
    pub fn settings(&self) -> Result<Settings> {
        self.validate()?;

        let (manifest_path, required) = match &self.config {
            Some(path) => (path.clone(), true),
            None => (self.project_dir.join(MANIFEST_FILE_NAME), false),
        };
        let manifest = metadata::load_manifest(&manifest_path, required)?.unwrap_or_default();

        self.merge(manifest)
    }

    /// Merges flags over `manifest`.
    fn merge(&self, manifest: BundleManifest) -> Result<Settings> {
        let build_command = if self.build_command.is_empty() {
            manifest.build_command.unwrap_or_default()
        } else {
            self.build_command.clone()
        };

        let kind = self.toolchain.or(manifest.toolchain).unwrap_or(
            if build_command.is_empty() {
                ToolchainKind::Swift
            } else {
                ToolchainKind::Custom
            },
        );
        let toolchain = Toolchain::from_kind(
            kind,
            build_command,
            self.bin_dir.clone().or(manifest.bin_dir),
        )?;

        let package = PackageSettings {
            product_name: self.name.clone().or(manifest.name).unwrap_or_default(),
            binary_name: self.binary.clone().or(manifest.binary),
            identifier: self.identifier.clone().or(manifest.identifier),
            version: self.app_version.clone().or(manifest.version),
        };

        let mut macos: MacOsSettings = manifest.macos.unwrap_or_default();
        macos.info_plist = !self.no_info_plist && manifest.info_plist.unwrap_or(true);

        let mut builder = SettingsBuilder::new()
            .project_directory(&self.project_dir)
            .package_settings(package)
            .macos_settings(macos)
            .toolchain(toolchain);

        if let Some(configuration) = self.configuration.clone().or(manifest.configuration) {
            builder = builder.configuration(configuration);
        }
        if let Some(resources) = self.resources.as_ref().or(manifest.resources.as_ref()) {
            builder = builder.resources_directory(resources);
        }
        if let Some(output_dir) = self.output_dir.as_ref().or(manifest.output_dir.as_ref()) {
            builder = builder.output_directory(output_dir);
        }

        builder.build().map_err(BundlerError::from)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        self.output.indent(message)
    }
}
