//! macOS platform-specific settings.

use serde::Deserialize;

/// macOS application bundle (.app) configuration.
///
/// Controls the generated `Contents/Info.plist`.
///
/// # Configuration
///
/// Add to `Bundle.toml`:
///
/// ```toml
/// [macos]
/// minimum_system_version = "13.0"
/// category = "public.app-category.productivity"
/// copyright = "Copyright © 2026 Example Inc."
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MacOsSettings {
    /// Write `Contents/Info.plist`.
    ///
    /// Default: true
    #[serde(skip)]
    pub info_plist: bool,

    /// Minimum macOS version required (LSMinimumSystemVersion).
    ///
    /// Example: "11.0", "13.0"
    ///
    /// Default: None (key omitted)
    pub minimum_system_version: Option<String>,

    /// Application category (LSApplicationCategoryType).
    ///
    /// Example: "public.app-category.developer-tools"
    ///
    /// Default: None (key omitted)
    pub category: Option<String>,

    /// Copyright notice (NSHumanReadableCopyright).
    ///
    /// Default: None (key omitted)
    pub copyright: Option<String>,
}

impl Default for MacOsSettings {
    fn default() -> Self {
        Self {
            info_plist: true,
            minimum_system_version: None,
            category: None,
            copyright: None,
        }
    }
}
