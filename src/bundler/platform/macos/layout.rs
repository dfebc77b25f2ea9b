//! Paths of a macOS application bundle.

use std::path::{Path, PathBuf};

/// Directory layout of `<name>.app`.
///
/// ```text
/// <output>/<name>.app/
///   Contents/
///     Info.plist
///     MacOS/<name>
///     Resources/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    root: PathBuf,
    name: String,
}

impl BundleLayout {
    /// Lays out `<output_dir>/<name>.app`.
    pub fn new(output_dir: &Path, name: &str) -> Self {
        Self {
            root: output_dir.join(format!("{name}.app")),
            name: name.to_string(),
        }
    }

    /// `<name>.app`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<name>.app/Contents`
    pub fn contents(&self) -> PathBuf {
        self.root.join("Contents")
    }

    /// `<name>.app/Contents/MacOS`
    pub fn executable_dir(&self) -> PathBuf {
        self.contents().join("MacOS")
    }

    /// `<name>.app/Contents/Resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.contents().join("Resources")
    }

    /// `<name>.app/Contents/MacOS/<name>`
    pub fn executable(&self) -> PathBuf {
        self.executable_dir().join(&self.name)
    }

    /// `<name>.app/Contents/Info.plist`
    pub fn info_plist(&self) -> PathBuf {
        self.contents().join("Info.plist")
    }

    /// Directories that must exist before anything is copied, parents first.
    pub fn directories(&self) -> [PathBuf; 4] {
        [
            self.root.clone(),
            self.contents(),
            self.executable_dir(),
            self.resources_dir(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_paths_from_name() {
        let layout = BundleLayout::new(Path::new("/out"), "Pensive");

        assert_eq!(layout.root(), Path::new("/out/Pensive.app"));
        assert_eq!(layout.contents(), Path::new("/out/Pensive.app/Contents"));
        assert_eq!(
            layout.executable(),
            Path::new("/out/Pensive.app/Contents/MacOS/Pensive")
        );
        assert_eq!(
            layout.resources_dir(),
            Path::new("/out/Pensive.app/Contents/Resources")
        );
        assert_eq!(
            layout.info_plist(),
            Path::new("/out/Pensive.app/Contents/Info.plist")
        );
    }
}
