//! app_bundler - packages a compiled binary and its resources as a macOS `.app` bundle.
//!
//! Exit code 0 guarantees the bundle was fully populated. A failed build
//! exits with the toolchain's own exit code; any other failure exits with 1.

use app_bundler::cli::{self, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let output = OutputManager::new(false, false);
            output.error(&format!("Error: {}", e));
            for suggestion in e.recovery_suggestions() {
                output.error(&format!("  hint: {}", suggestion));
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
