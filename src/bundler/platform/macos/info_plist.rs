//! `Contents/Info.plist` generation.

use crate::bundler::{
    error::{ErrorExt, Result},
    settings::Settings,
};
use plist::{Dictionary, Value};
use std::path::Path;

/// Builds the Info.plist dictionary for `settings`.
fn info_dictionary(settings: &Settings) -> Dictionary {
    let mut dict = Dictionary::new();
    let mut set = |key: &str, value: &str| {
        dict.insert(key.to_string(), Value::String(value.to_string()));
    };

    set("CFBundleDevelopmentRegion", "en");
    set("CFBundleExecutable", settings.product_name());
    set("CFBundleIdentifier", &settings.identifier());
    set("CFBundleInfoDictionaryVersion", "6.0");
    set("CFBundleName", settings.product_name());
    set("CFBundleDisplayName", settings.product_name());
    set("CFBundlePackageType", "APPL");
    set("CFBundleShortVersionString", settings.version_string());
    set("CFBundleVersion", settings.version_string());

    let macos = settings.macos();
    if let Some(version) = &macos.minimum_system_version {
        set("LSMinimumSystemVersion", version);
    }
    if let Some(category) = &macos.category {
        set("LSApplicationCategoryType", category);
    }
    if let Some(copyright) = &macos.copyright {
        set("NSHumanReadableCopyright", copyright);
    }

    dict.insert("NSHighResolutionCapable".to_string(), Value::Boolean(true));
    dict
}

/// Writes `Info.plist` to `path`, replacing any previous file.
pub(super) async fn write_info_plist(settings: &Settings, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    Value::Dictionary(info_dictionary(settings)).to_writer_xml(&mut buffer)?;

    tokio::fs::write(path, buffer)
        .await
        .fs_context("writing Info.plist", path)?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
