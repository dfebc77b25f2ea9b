//! User-supplied build command.

use super::{BuildRequest, ToolchainKind, run_build};
use crate::bundler::error::Result;

/// Runs `command[1..]` with the already resolved program.
pub(super) async fn build(command: &[String], request: &BuildRequest<'_>) -> Result<()> {
    run_build(
        ToolchainKind::Custom,
        request,
        command.iter().skip(1),
    )
    .await
}
