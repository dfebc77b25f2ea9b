//! External tool detection and availability checking.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Locates `program` on `PATH`, or relative to `project_dir` when it names a path.
///
/// Runs before the build so a missing toolchain is reported as such rather
/// than as a build failure.
pub fn locate(program: &str, project_dir: &Path) -> Result<PathBuf> {
    match which::which_in(program, std::env::var_os("PATH"), project_dir) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", program, e);
            Err(Error::ToolNotFound {
                program: program.to_string(),
                reason: e.to_string(),
            })
        }
    }
}
