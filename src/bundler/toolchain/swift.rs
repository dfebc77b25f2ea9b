//! Swift Package Manager toolchain.

use super::{BuildRequest, ToolchainKind, query, run_build};
use crate::bundler::error::{Context, Result};
use std::path::PathBuf;

/// `swift build -c <configuration>`
pub(super) async fn build(request: &BuildRequest<'_>) -> Result<()> {
    run_build(
        ToolchainKind::Swift,
        request,
        ["build", "-c", request.configuration],
    )
    .await
}

/// `swift build -c <configuration> --show-bin-path`
pub(super) async fn bin_dir(request: &BuildRequest<'_>) -> Result<PathBuf> {
    let path = query(
        request,
        ["build", "-c", request.configuration, "--show-bin-path"],
    )
    .await?;

    // Build chatter, if any, precedes the path on the last line.
    let path = path
        .lines()
        .last()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .context("swift build --show-bin-path printed no path")?;

    Ok(PathBuf::from(path))
}
