//! Application identity.

/// Application identity and metadata.
///
/// The product name drives every derived bundle path
/// (`<product_name>.app/Contents/MacOS/<product_name>`).
///
/// # Examples
///
/// ```no_run
/// use app_bundler::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "Pensive".into(),
///     binary_name: None,
///     identifier: Some("com.example.pensive".into()),
///     version: Some("1.2.0".into()),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSettings {
    /// Application name; also the name of the bundle and of its executable.
    pub product_name: String,

    /// File name of the compiled binary in the toolchain's bin directory.
    ///
    /// Default: None (same as `product_name`)
    pub binary_name: Option<String>,

    /// Bundle identifier in reverse domain notation (CFBundleIdentifier).
    ///
    /// Default: None (`com.example.<lowercased product name>`)
    pub identifier: Option<String>,

    /// Bundle version (CFBundleVersion / CFBundleShortVersionString).
    ///
    /// Default: None ([`DEFAULT_VERSION`](super::DEFAULT_VERSION))
    pub version: Option<String>,
}
