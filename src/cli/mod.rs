//! Command line interface for the app bundler.
//!
//! Parses flags, resolves settings and runs the bundling pipeline, printing
//! one progress line per step.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{Bundler, Stage};
use crate::error::Result;

/// Main CLI entry point
///
/// Returns the process exit code on success.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime_config = RuntimeConfig::from(&args);
    execute(&args, &runtime_config).await
}

/// Runs the bundler for already parsed arguments.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let settings = args.settings()?;

    runtime_config.section(&format!("Bundling {}", settings.product_name()));
    runtime_config.verbose_println(&format!(
        "Project: {}",
        settings.project_directory().display()
    ));
    runtime_config.verbose_println(&format!(
        "Resources: {}",
        settings.resources_directory().display()
    ));

    let bundler = Bundler::new(settings);
    let artifact = bundler
        .bundle_with_progress(|stage| match stage {
            Stage::SkippingResources(_) => runtime_config.warn(&stage.to_string()),
            _ => runtime_config.progress(&stage.to_string()),
        })
        .await?;

    runtime_config.success(&format!("Created {}", artifact.path().display()));
    runtime_config.indent(&format!("Size: {} bytes", artifact.size));
    runtime_config.indent(&format!("SHA256: {}", artifact.checksum));
    runtime_config.indent(&format!("Run it with: open {}", artifact.path().display()));

    Ok(0)
}
