//! Cargo toolchain.

use super::{BuildRequest, ToolchainKind, query, run_build};
use crate::bundler::error::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// The subset of `cargo metadata` output the bundler reads.
#[derive(Debug, Deserialize)]
struct CargoMetadata {
    target_directory: PathBuf,
}

/// Maps a build configuration to a cargo profile name.
///
/// `debug` is accepted as an alias for the `dev` profile.
fn profile(configuration: &str) -> &str {
    match configuration {
        "debug" => "dev",
        other => other,
    }
}

/// Maps a cargo profile to its output directory under the target dir.
fn profile_dir(profile: &str) -> &str {
    match profile {
        "dev" | "test" => "debug",
        "bench" => "release",
        other => other,
    }
}

/// `cargo build --profile <profile> --bin <binary>`
pub(super) async fn build(request: &BuildRequest<'_>) -> Result<()> {
    run_build(
        ToolchainKind::Cargo,
        request,
        [
            "build",
            "--profile",
            profile(request.configuration),
            "--bin",
            request.binary,
        ],
    )
    .await
}

/// `<target_directory>/<profile dir>` from `cargo metadata`.
pub(super) async fn bin_dir(request: &BuildRequest<'_>) -> Result<PathBuf> {
    let json = query(
        request,
        ["metadata", "--format-version", "1", "--no-deps"],
    )
    .await?;
    let metadata: CargoMetadata = serde_json::from_str(&json)?;

    Ok(metadata
        .target_directory
        .join(profile_dir(profile(request.configuration))))
}
