//! Platform-specific bundle formats.

pub mod macos;
