//! macOS application bundles (`<name>.app`).

pub mod app;
mod info_plist;
mod layout;

pub use layout::BundleLayout;
