//! Builder for constructing Settings.

use super::{
    DEFAULT_APP_NAME, DEFAULT_CONFIGURATION, DEFAULT_RESOURCES_DIR, MacOsSettings,
    PackageSettings, Settings,
};
use crate::bundler::error::{Error, ErrorExt, Result};
use crate::bundler::toolchain::Toolchain;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field is optional. Unset fields fall back to the defaults in
/// [`settings`](super): the `Pensive` application, the Swift toolchain in
/// `release` configuration, resources from `Resources/` and the bundle
/// written into the project directory.
///
/// Relative paths are resolved against the project directory, which is
/// itself made absolute against the current directory.
///
/// # Examples
///
/// ```no_run
/// use app_bundler::bundler::{SettingsBuilder, Toolchain};
///
/// # fn example() -> app_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory("app")
///     .toolchain(Toolchain::Cargo)
///     .configuration("dev")
///     .output_directory("dist")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_directory: Option<PathBuf>,
    package_settings: PackageSettings,
    macos_settings: MacOsSettings,
    toolchain: Option<Toolchain>,
    configuration: Option<String>,
    output_directory: Option<PathBuf>,
    resources_directory: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory the toolchain runs in.
    ///
    /// Default: current directory
    pub fn project_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets application identity.
    ///
    /// An empty product name falls back to the default application name.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets macOS bundle settings.
    pub fn macos_settings(mut self, settings: MacOsSettings) -> Self {
        self.macos_settings = settings;
        self
    }

    /// Sets the toolchain.
    ///
    /// Default: [`Toolchain::Swift`]
    pub fn toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    /// Sets the build configuration.
    ///
    /// Default: "release"
    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Sets the directory the bundle is written to.
    ///
    /// Default: project directory
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the resources source directory.
    ///
    /// Default: `Resources` in the project directory
    pub fn resources_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resources_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the application name, binary name or
    /// configuration is not usable as a single path component, or if the
    /// bundle and the resources directory would contain one another.
    pub fn build(self) -> Result<Settings> {
        let mut package = self.package_settings;
        if package.product_name.is_empty() {
            package.product_name = DEFAULT_APP_NAME.to_string();
        }
        validate_component("application name", &package.product_name)?;
        if let Some(binary) = &package.binary_name {
            validate_component("binary name", binary)?;
        }

        let configuration = self
            .configuration
            .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string());
        if configuration.trim().is_empty() {
            return Err(Error::Config("build configuration cannot be empty".into()));
        }

        let project_directory = self.project_directory.unwrap_or_else(|| PathBuf::from("."));
        let project_directory = project_directory
            .absolutize()
            .fs_context("resolving project directory", &project_directory)?
            .into_owned();

        let output_directory = match self.output_directory {
            Some(dir) => resolve(&project_directory, &dir)?,
            None => project_directory.clone(),
        };
        let resources_directory = resolve(
            &project_directory,
            self.resources_directory
                .as_deref()
                .unwrap_or(Path::new(DEFAULT_RESOURCES_DIR)),
        )?;

        let toolchain = match self.toolchain.unwrap_or(Toolchain::Swift) {
            Toolchain::Custom { command, bin_dir } => Toolchain::Custom {
                command,
                bin_dir: resolve(&project_directory, &bin_dir)?,
            },
            other => other,
        };

        let settings = Settings::new(
            package,
            self.macos_settings,
            toolchain,
            configuration,
            project_directory,
            output_directory,
            resources_directory,
        );
        check_overlap(&settings)?;
        Ok(settings)
    }
}

/// Makes `path` absolute against `base` and normalizes `.` and `..`.
fn resolve(base: &Path, path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize_from(base)
        .fs_context("resolving path", path)?
        .into_owned())
}

/// Copying resources into a bundle that lives inside them (or the reverse)
/// would recurse into its own output.
fn check_overlap(settings: &Settings) -> Result<()> {
    let layout = settings.layout();
    let bundle = layout.root();
    let resources = settings.resources_directory();
    if bundle.starts_with(resources) || resources.starts_with(bundle) {
        return Err(Error::Config(format!(
            "bundle {} and resources directory {} must not contain one another",
            bundle.display(),
            resources.display()
        )));
    }
    Ok(())
}

/// Names that become bundle path components must be a single plain component.
fn validate_component(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{what} cannot be empty")));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(Error::Config(format!(
            "{what} {value:?} must not contain path separators"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bundle_inside_resources() {
        let tmp = tempfile::tempdir().unwrap();

        let err = SettingsBuilder::new()
            .project_directory(tmp.path())
            .resources_directory(".")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("must not contain one another")));

        let err = SettingsBuilder::new()
            .project_directory(tmp.path())
            .output_directory("Resources/../Resources/dist")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_resources_inside_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SettingsBuilder::new()
            .project_directory(tmp.path())
            .resources_directory("Pensive.app/Contents/Resources")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sibling_resources_and_output_are_accepted() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_directory(tmp.path())
            .resources_directory("assets/../Resources")
            .output_directory("dist")
            .build()
            .unwrap();
        assert!(settings.resources_directory().ends_with("Resources"));
        assert!(!settings.resources_directory().to_string_lossy().contains(".."));
    }

    #[test]
    fn defaults_match_original_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_directory(tmp.path())
            .build()
            .unwrap();

        assert_eq!(settings.product_name(), "Pensive");
        assert_eq!(settings.binary_name(), "Pensive");
        assert_eq!(settings.configuration(), "release");
        assert_eq!(settings.toolchain(), &Toolchain::Swift);
        assert_eq!(settings.output_directory(), tmp.path());
        assert_eq!(settings.resources_directory(), tmp.path().join("Resources"));
        assert_eq!(settings.identifier(), "com.example.pensive");
        assert_eq!(settings.version_string(), "1.0");
        assert!(settings.macos().info_plist);
    }

    #[test]
    fn resolves_relative_paths_against_project() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = SettingsBuilder::new()
            .project_directory(tmp.path())
            .output_directory("dist")
            .resources_directory("/opt/assets")
            .toolchain(Toolchain::Custom {
                command: vec!["make".into()],
                bin_dir: "build/bin".into(),
            })
            .build()
            .unwrap();

        assert_eq!(settings.output_directory(), tmp.path().join("dist"));
        assert_eq!(settings.resources_directory(), Path::new("/opt/assets"));
        assert_eq!(
            settings.toolchain(),
            &Toolchain::Custom {
                command: vec!["make".into()],
                bin_dir: tmp.path().join("build/bin"),
            }
        );
    }

    #[test]
    fn rejects_names_with_separators() {
        for name in ["../evil", "a/b", ".."] {
            let err = SettingsBuilder::new()
                .package_settings(PackageSettings {
                    product_name: name.into(),
                    ..Default::default()
                })
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{name} accepted");
        }
    }

    #[test]
    fn binary_name_overrides_product_name() {
        let settings = SettingsBuilder::new()
            .package_settings(PackageSettings {
                product_name: "Pensive".into(),
                binary_name: Some("pensive-cli".into()),
                identifier: Some("org.pensive.app".into()),
                version: Some("2.1.0".into()),
            })
            .build()
            .unwrap();

        assert_eq!(settings.binary_name(), "pensive-cli");
        assert_eq!(settings.identifier(), "org.pensive.app");
        assert_eq!(settings.version_string(), "2.1.0");
        assert!(settings.layout().executable().ends_with("MacOS/Pensive"));
    }
}
