//! Application bundle packaging.
//!
//! Turns the output of an external compiler toolchain into a macOS
//! `<name>.app` directory:
//!
//! ```text
//! <name>.app/Contents/MacOS/<name>
//! <name>.app/Contents/Resources/...
//! <name>.app/Contents/Info.plist
//! ```
//!
//! # Example
//!
//! ```no_run
//! use app_bundler::bundler::{Bundler, PackageSettings, SettingsBuilder};
//!
//! # async fn example() -> app_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_directory(".")
//!     .package_settings(PackageSettings {
//!         product_name: "Pensive".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let artifact = Bundler::new(settings)
//!     .bundle_with_progress(|stage| println!("{stage}"))
//!     .await?;
//! println!("open {}", artifact.path().display());
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod toolchain;
pub mod utils;

pub use builder::{BundleDigest, BundledArtifact, Bundler, Stage, calculate_sha256};
pub use error::{Error, Result};
pub use platform::macos::BundleLayout;
pub use settings::{MacOsSettings, PackageSettings, Settings, SettingsBuilder};
pub use toolchain::{Toolchain, ToolchainKind};
