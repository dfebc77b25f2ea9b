//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that compiles the
//! application with its toolchain and assembles the `.app` bundle.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`](crate::bundler::Settings)
//! 2. Checks that the toolchain program is available
//! 3. Builds, then resolves the compiled binary
//! 4. Delegates assembly to [`platform::macos::app`](crate::bundler::platform::macos::app)
//! 5. Returns a [`BundledArtifact`] with size and checksum
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for bundle trees
//! - [`orchestrator`] - Main [`Bundler`] struct
//! - [`progress`] - [`Stage`] reported before each step
//! - [`tool_detection`] - External tool availability checking

mod checksum;
mod orchestrator;
mod progress;
mod tool_detection;

pub use checksum::{BundleDigest, calculate_sha256};
pub use orchestrator::{BundledArtifact, Bundler};
pub use progress::Stage;
