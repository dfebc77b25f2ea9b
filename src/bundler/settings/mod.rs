//! Configuration structures for bundling operations.
//!
//! [`Settings`] is the fully resolved configuration of one packaging run.
//! It is constructed through [`SettingsBuilder`], which fills in defaults,
//! resolves relative paths against the project directory and validates the
//! application name.

mod builder;
mod core;
mod macos;
mod package;

pub use builder::SettingsBuilder;
pub use core::Settings;
pub use macos::MacOsSettings;
pub use package::PackageSettings;

/// Application name used when none is configured.
pub const DEFAULT_APP_NAME: &str = "Pensive";

/// Build configuration passed to the toolchain by default.
pub const DEFAULT_CONFIGURATION: &str = "release";

/// Resources source directory, relative to the project directory.
pub const DEFAULT_RESOURCES_DIR: &str = "Resources";

/// Bundle version written to Info.plist when none is configured.
pub const DEFAULT_VERSION: &str = "1.0";
