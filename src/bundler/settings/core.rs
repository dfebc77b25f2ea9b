//! Core Settings struct and implementations.

use super::{DEFAULT_VERSION, MacOsSettings, PackageSettings};
use crate::bundler::platform::macos::BundleLayout;
use crate::bundler::toolchain::Toolchain;
use std::path::{Path, PathBuf};

/// Resolved settings for one packaging run.
///
/// All paths are absolute. Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use app_bundler::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> app_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory("/work/pensive")
///     .package_settings(PackageSettings {
///         product_name: "Pensive".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert_eq!(settings.layout().root().file_name().unwrap(), "Pensive.app");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    package: PackageSettings,
    macos: MacOsSettings,
    toolchain: Toolchain,
    configuration: String,
    project_directory: PathBuf,
    output_directory: PathBuf,
    resources_directory: PathBuf,
}

impl Settings {
    /// Returns the application name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the binary file name the toolchain produces.
    pub fn binary_name(&self) -> &str {
        self.package
            .binary_name
            .as_deref()
            .unwrap_or(&self.package.product_name)
    }

    /// Returns the bundle identifier, defaulting to `com.example.<name>`.
    pub fn identifier(&self) -> String {
        match &self.package.identifier {
            Some(identifier) => identifier.clone(),
            None => format!("com.example.{}", self.product_name().to_lowercase()),
        }
    }

    /// Returns the bundle version string.
    pub fn version_string(&self) -> &str {
        self.package.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// Returns the macOS bundle settings.
    pub fn macos(&self) -> &MacOsSettings {
        &self.macos
    }

    /// Returns the toolchain used for the build step.
    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Returns the build configuration (e.g. "release").
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    /// Returns the directory the toolchain runs in.
    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Returns the directory the `.app` bundle is created in.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Returns the resources source directory. It may not exist.
    pub fn resources_directory(&self) -> &Path {
        &self.resources_directory
    }

    /// Returns the bundle layout derived from the output directory and name.
    pub fn layout(&self) -> BundleLayout {
        BundleLayout::new(&self.output_directory, self.product_name())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        macos: MacOsSettings,
        toolchain: Toolchain,
        configuration: String,
        project_directory: PathBuf,
        output_directory: PathBuf,
        resources_directory: PathBuf,
    ) -> Self {
        Self {
            package,
            macos,
            toolchain,
            configuration,
            project_directory,
            output_directory,
            resources_directory,
        }
    }
}
