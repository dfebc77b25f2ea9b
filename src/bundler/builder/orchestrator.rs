//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the toolchain
//! and hands the compiled binary to the `.app` assembler.

use crate::bundler::{
    BundleLayout, Error, Result, Settings,
    platform::macos::app,
    toolchain::BuildRequest,
};

use super::{
    Stage,
    checksum::{BundleDigest, calculate_sha256},
    tool_detection,
};
use std::path::PathBuf;

/// Result of a successful bundling run.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Paths of the produced bundle
    pub layout: BundleLayout,
    /// Compiled binary the bundle was built from
    pub source_binary: PathBuf,
    /// Total size of all files in the bundle, in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the bundle tree
    pub checksum: String,
}

impl BundledArtifact {
    /// Bundle root (`<name>.app`).
    pub fn path(&self) -> &std::path::Path {
        self.layout.root()
    }
}

/// Main bundler orchestrator.
///
/// Runs the pipeline strictly in order and stops at the first failure:
///
/// 1. Locate the toolchain program
/// 2. Build; a failed build returns before the bundle is touched
/// 3. Ask the toolchain for the bin directory and check the binary exists
/// 4. Assemble the `.app` (see [`app::bundle_project`])
/// 5. Checksum the result
///
/// A failure after step 3 leaves the bundle partially updated; nothing is
/// rolled back.
///
/// # Examples
///
/// ```no_run
/// use app_bundler::bundler::{Bundler, SettingsBuilder};
///
/// # async fn example() -> app_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_directory(".").build()?;
/// let artifact = Bundler::new(settings).bundle().await?;
///
/// println!("Created: {}", artifact.path().display());
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the pipeline, reporting stages only through the log.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        self.bundle_with_progress(|stage| log::info!("{stage}")).await
    }

    /// Runs the pipeline, calling `on_stage` before each step.
    pub async fn bundle_with_progress<F>(&self, mut on_stage: F) -> Result<BundledArtifact>
    where
        F: FnMut(Stage<'_>),
    {
        let settings = &self.settings;
        let toolchain = settings.toolchain();
        let program = tool_detection::locate(toolchain.program(), settings.project_directory())?;

        let request = BuildRequest {
            program: &program,
            project_dir: settings.project_directory(),
            configuration: settings.configuration(),
            binary: settings.binary_name(),
        };

        let toolchain_name = toolchain.kind().to_string();
        on_stage(Stage::Building {
            toolchain: &toolchain_name,
            configuration: settings.configuration(),
        });
        toolchain.build(&request).await?;

        on_stage(Stage::ResolvingBinary);
        let bin_dir = toolchain.bin_dir(&request).await?;
        let binary = bin_dir.join(settings.binary_name());
        if !binary.is_file() {
            return Err(Error::BinaryNotFound(binary));
        }
        log::debug!("Using binary {}", binary.display());

        let layout = app::bundle_project(settings, &binary, &mut on_stage).await?;

        on_stage(Stage::Checksumming);
        let BundleDigest { sha256, size } = calculate_sha256(layout.root()).await?;

        log::info!(
            "Bundled {} ({} bytes, sha256 {})",
            layout.root().display(),
            size,
            sha256
        );

        Ok(BundledArtifact {
            layout,
            source_binary: binary,
            size,
            checksum: sha256,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::bundler::{MacOsSettings, SettingsBuilder, Toolchain};
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// A project whose "build" is a shell snippet and whose binary already
    /// sits in `bin/`.
    fn project(build_script: &str) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("bin")).unwrap();
        let binary = tmp.path().join("bin/Pensive");
        std::fs::write(&binary, b"\x7fELF fake binary").unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o644)).unwrap();
        std::fs::write(tmp.path().join("build.sh"), build_script).unwrap();
        tmp
    }

    fn settings(project: &Path) -> SettingsBuilder {
        SettingsBuilder::new()
            .project_directory(project)
            .output_directory("out")
            .toolchain(Toolchain::Custom {
                command: vec!["sh".into(), "build.sh".into()],
                bin_dir: "bin".into(),
            })
    }

    /// Snapshot of every path under `root` with its mode and contents.
    fn snapshot(root: &Path) -> Vec<(PathBuf, u32, Vec<u8>)> {
        let mut entries: Vec<_> = walkdir::WalkDir::new(root)
            .into_iter()
            .map(|e| e.unwrap())
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

    #[tokio::test]
    async fn places_executable_binary() {
        let tmp = project("exit 0\n");
        let bundler = Bundler::new(settings(tmp.path()).build().unwrap());

        let artifact = bundler.bundle().await.unwrap();

        let executable = tmp.path().join("out/Pensive.app/Contents/MacOS/Pensive");
        assert_eq!(artifact.layout.executable(), executable);
        assert_eq!(std::fs::read(&executable).unwrap(), b"\x7fELF fake binary");
        let mode = std::fs::metadata(&executable).unwrap().permissions().mode();
        assert_ne!(mode & 0o100, 0, "owner exec bit missing");
        assert_eq!(artifact.checksum.len(), 64);
    }

    #[tokio::test]
    async fn copies_resources_recursively() {
        let tmp = project("exit 0\n");
        let resources = tmp.path().join("Resources");
        std::fs::create_dir_all(resources.join("sub")).unwrap();
        std::fs::write(resources.join("a.txt"), b"alpha").unwrap();
        std::fs::write(resources.join("sub/b.txt"), b"beta").unwrap();

        Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap();

        let dest = tmp.path().join("out/Pensive.app/Contents/Resources");
        assert_eq!(std::fs::read(dest.join("a.txt")).unwrap(), b"alpha");
        assert_eq!(std::fs::read(dest.join("sub/b.txt")).unwrap(), b"beta");
    }

    #[tokio::test]
    async fn missing_resources_leave_empty_directory() {
        let tmp = project("exit 0\n");
        let mut stages = Vec::new();

        Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle_with_progress(|stage| stages.push(stage.to_string()))
            .await
            .unwrap();

        let dest = tmp.path().join("out/Pensive.app/Contents/Resources");
        assert!(dest.is_dir());
        assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
        assert!(stages.iter().any(|s| s.contains("skipping")));
    }

    #[tokio::test]
    async fn rerun_keeps_unrelated_files() {
        let tmp = project("exit 0\n");
        let bundler = Bundler::new(settings(tmp.path()).build().unwrap());
        let first = bundler.bundle().await.unwrap();

        let extra_exec = first.layout.executable_dir().join("helper");
        let extra_res = first.layout.resources_dir().join("user.txt");
        std::fs::write(&extra_exec, b"helper").unwrap();
        std::fs::write(&extra_res, b"mine").unwrap();

        bundler.bundle().await.unwrap();

        assert_eq!(std::fs::read(&extra_exec).unwrap(), b"helper");
        assert_eq!(std::fs::read(&extra_res).unwrap(), b"mine");
    }

    #[tokio::test]
    async fn identical_runs_produce_identical_checksums() {
        let tmp = project("exit 0\n");
        let bundler = Bundler::new(settings(tmp.path()).build().unwrap());

        let first = bundler.bundle().await.unwrap();
        let second = bundler.bundle().await.unwrap();

        assert_eq!(first.checksum, second.checksum);
        assert_eq!(first.size, second.size);
    }

    #[tokio::test]
    async fn failed_build_leaves_bundle_untouched() {
        let tmp = project("exit 0\n");
        Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap();
        let bundle = tmp.path().join("out/Pensive.app");
        let before = snapshot(&bundle);

        // New binary and resources that must not make it into the bundle.
        std::fs::write(tmp.path().join("bin/Pensive"), b"changed").unwrap();
        std::fs::create_dir_all(tmp.path().join("Resources")).unwrap();
        std::fs::write(tmp.path().join("Resources/new.txt"), b"new").unwrap();
        std::fs::write(tmp.path().join("build.sh"), "exit 7\n").unwrap();

        let err = Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BuildFailed { code: Some(7), .. }));
        assert_eq!(snapshot(&bundle), before);
    }

    #[tokio::test]
    async fn failed_build_creates_nothing() {
        let tmp = project("exit 1\n");

        let err = Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BuildFailed { .. }));
        assert!(!tmp.path().join("out").exists());
    }

    #[tokio::test]
    async fn missing_binary_fails_before_mutation() {
        let tmp = project("exit 0\n");
        std::fs::remove_file(tmp.path().join("bin/Pensive")).unwrap();

        let err = Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BinaryNotFound(_)));
        assert!(!tmp.path().join("out").exists());
    }

    #[tokio::test]
    async fn info_plist_can_be_disabled() {
        let tmp = project("exit 0\n");
        let with_plist = Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle()
            .await
            .unwrap();
        assert!(with_plist.layout.info_plist().is_file());

        let tmp = project("exit 0\n");
        let without = Bundler::new(
            settings(tmp.path())
                .macos_settings(MacOsSettings {
                    info_plist: false,
                    ..Default::default()
                })
                .build()
                .unwrap(),
        )
        .bundle()
        .await
        .unwrap();
        assert!(!without.layout.info_plist().exists());
    }

    fn label(stage: &Stage<'_>) -> &'static str {
        match stage {
            Stage::Building { .. } => "build",
            Stage::ResolvingBinary => "resolve",
            Stage::CreatingLayout(_) => "layout",
            Stage::CopyingBinary(_) => "binary",
            Stage::CopyingResources(_) => "resources",
            Stage::SkippingResources(_) => "no-resources",
            Stage::SettingPermissions(_) => "chmod",
            Stage::WritingInfoPlist(_) => "plist",
            Stage::Checksumming => "checksum",
        }
    }

    #[tokio::test]
    async fn reports_stages_in_order() {
        let tmp = project("exit 0\n");
        let mut stages = Vec::new();

        Bundler::new(settings(tmp.path()).build().unwrap())
            .bundle_with_progress(|stage| stages.push(label(&stage)))
            .await
            .unwrap();

        assert_eq!(
            stages,
            [
                "build",
                "resolve",
                "layout",
                "binary",
                "no-resources",
                "chmod",
                "plist",
                "checksum"
            ]
        );
    }
}
