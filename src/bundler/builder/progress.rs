//! Pipeline stages reported while bundling.

use std::fmt;
use std::path::Path;

/// A step of the bundling pipeline, reported before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    /// Compiling with the toolchain
    Building {
        /// Toolchain name
        toolchain: &'a str,
        /// Build configuration
        configuration: &'a str,
    },
    /// Asking the toolchain for the binary location
    ResolvingBinary,
    /// Creating the bundle directories under this root
    CreatingLayout(&'a Path),
    /// Copying the binary to this path
    CopyingBinary(&'a Path),
    /// Copying resources from this directory
    CopyingResources(&'a Path),
    /// Resources directory absent, nothing to copy
    SkippingResources(&'a Path),
    /// Marking this file executable
    SettingPermissions(&'a Path),
    /// Writing Info.plist at this path
    WritingInfoPlist(&'a Path),
    /// Hashing the finished bundle
    Checksumming,
}

impl fmt::Display for Stage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Building {
                toolchain,
                configuration,
            } => write!(f, "Building with {toolchain} ({configuration})..."),
            Self::ResolvingBinary => f.write_str("Locating compiled binary..."),
            Self::CreatingLayout(root) => {
                write!(f, "Creating bundle structure at {}...", root.display())
            }
            Self::CopyingBinary(dest) => write!(f, "Copying binary to {}...", dest.display()),
            Self::CopyingResources(src) => {
                write!(f, "Copying resources from {}...", src.display())
            }
            Self::SkippingResources(src) => {
                write!(f, "No resources at {}, skipping", src.display())
            }
            Self::SettingPermissions(path) => {
                write!(f, "Setting permissions on {}...", path.display())
            }
            Self::WritingInfoPlist(path) => write!(f, "Writing {}...", path.display()),
            Self::Checksumming => f.write_str("Computing bundle checksum..."),
        }
    }
}
