//! Shared helpers for app_bundler integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A copy of `tests/fixtures/project` in a temporary directory
pub struct TestProject {
    /// Keeps the directory alive
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Project root
    pub path: PathBuf,
}

impl TestProject {
    /// Copy the fixture project into a fresh temporary directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project");

        for entry in walkdir::WalkDir::new(&fixture) {
            let entry = entry.expect("Failed to walk fixture");
            let dest = path.join(entry.path().strip_prefix(&fixture).unwrap());
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest).expect("Failed to create directory");
            } else {
                std::fs::copy(entry.path(), &dest).expect("Failed to copy fixture file");
            }
        }

        Self { temp, path }
    }

    /// The bundle the fixture produces
    pub fn bundle(&self) -> PathBuf {
        self.path.join("Pensive.app")
    }

    /// Bundler command running in this project
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("app_bundler").unwrap();
        cmd.current_dir(&self.path)
            .env_remove("APP_BUNDLE_NAME")
            .env_remove("APP_BUNDLE_CONFIGURATION")
            .env_remove("BUILD_EXIT");
        cmd
    }

    /// Drops `Bundle.toml` so the built-in defaults apply
    #[allow(dead_code)]
    pub fn remove_manifest(&self) {
        std::fs::remove_file(self.path.join("Bundle.toml")).expect("Failed to remove manifest");
    }

    /// Directory for stand-in tools, outside the project tree
    #[allow(dead_code)]
    pub fn tools_dir(&self) -> PathBuf {
        self.temp.path().join("tools")
    }

    /// Installs an executable script named `name` into [`tools_dir`](Self::tools_dir)
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.tools_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create tools directory");
        let tool = dir.join(name);
        std::fs::write(&tool, script).expect("Failed to write tool script");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark tool executable");
    }

    /// `PATH` with [`tools_dir`](Self::tools_dir) searched first
    #[allow(dead_code)]
    pub fn path_env(&self) -> std::ffi::OsString {
        let mut paths = vec![self.tools_dir()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to build PATH")
    }

    /// Lines a stand-in tool recorded in `<tools_dir>/<name>.log`
    #[allow(dead_code)]
    pub fn tool_log(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.tools_dir().join(format!("{name}.log")))
            .expect("Failed to read tool log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Every path under `root` with its mode and contents, sorted
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn snapshot(root: &Path) -> Vec<(PathBuf, u32, Vec<u8>)> {
        use std::os::unix::fs::PermissionsExt;

        let mut entries: Vec<_> = walkdir::WalkDir::new(root)
            .into_iter()
            .map(|e| e.expect("Failed to walk bundle"))
            .map(|e| {
                let meta = std::fs::symlink_metadata(e.path()).unwrap();
                let contents = if meta.is_file() {
                    std::fs::read(e.path()).unwrap()
                } else {
                    Vec::new()
                };
                (e.path().to_path_buf(), meta.permissions().mode(), contents)
            })
            .collect();
        entries.sort();
        entries
    }
}
