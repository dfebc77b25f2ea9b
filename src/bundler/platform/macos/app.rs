//! `.app` bundle assembly.
//!
//! Populates an application bundle from an already compiled binary:
//!
//! 1. Create `Contents/MacOS` and `Contents/Resources` (idempotent)
//! 2. Copy the binary to `Contents/MacOS/<name>`, overwriting
//! 3. Merge the resources directory into `Contents/Resources`, if it exists
//! 4. Mark the binary executable
//! 5. Write `Contents/Info.plist`, if enabled
//!
//! Existing bundle contents that are not overwritten are left in place.

use super::{BundleLayout, info_plist};
use crate::bundler::{Stage, error::Result, settings::Settings, utils::fs};
use std::path::Path;

/// Assembles the bundle for `settings` around `binary`.
///
/// `binary` must already exist; the caller checks it before anything in the
/// bundle is touched. Returns the layout that was written.
pub async fn bundle_project(
    settings: &Settings,
    binary: &Path,
    on_stage: &mut dyn FnMut(Stage<'_>),
) -> Result<BundleLayout> {
    let layout = settings.layout();

    on_stage(Stage::CreatingLayout(layout.root()));
    for dir in layout.directories() {
        fs::create_dir_all(&dir).await?;
    }

    let executable = layout.executable();
    on_stage(Stage::CopyingBinary(&executable));
    fs::copy_file(binary, &executable).await?;

    let resources = settings.resources_directory();
    if resources.is_dir() {
        on_stage(Stage::CopyingResources(resources));
        let copied = fs::copy_dir(resources, &layout.resources_dir()).await?;
        log::info!("Copied {} resource entries from {}", copied, resources.display());
    } else {
        log::warn!(
            "Resources directory {} not found, skipping",
            resources.display()
        );
        on_stage(Stage::SkippingResources(resources));
    }

    on_stage(Stage::SettingPermissions(&executable));
    fs::set_executable(&executable).await?;

    if settings.macos().info_plist {
        let plist_path = layout.info_plist();
        on_stage(Stage::WritingInfoPlist(&plist_path));
        info_plist::write_info_plist(settings, &plist_path).await?;
    }

    Ok(layout)
}
