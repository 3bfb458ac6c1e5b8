use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use rtlocate_core::{InstalledFramework, LocateError};

use super::*;

static TEST_ROOT_COUNTER: AtomicU64 = AtomicU64::new(0);

fn test_root(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let sequence = TEST_ROOT_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "rtlocate-discovery-tests-{name}-{}-{nanos}-{sequence}",
        std::process::id()
    ));
    fs::create_dir_all(&path).expect("must create test root");
    path
}

fn mkdirs(root: &Path, relative: &[&str]) {
    for dir in relative {
        fs::create_dir_all(root.join(dir)).expect("must create fixture dir");
    }
}

fn seed_install(root: &Path) {
    mkdirs(
        root,
        &[
            "host/fxr/6.0.36",
            "host/fxr/8.0.11",
            "sdk/8.0.404",
            "sdk/6.0.428",
            "sdk/9.0.100-rc.2.24474.11",
            "sdk/NuGetFallbackFolder",
            "shared/Microsoft.NETCore.App/8.0.11",
            "shared/Microsoft.NETCore.App/6.0.36",
            "shared/Microsoft.NETCore.App/8.0.2",
            "shared/Microsoft.AspNetCore.App/8.0.11",
        ],
    );
    fs::write(
        root.join("shared/Microsoft.NETCore.App/8.0.11/.version"),
        "9b8d1b7ba4ba4e1b5b0b0e2a41a4c1b6c4e3d1f2\n8.0.11\n",
    )
    .expect("must write version marker");
    fs::write(root.join("shared/Microsoft.NETCore.App/README.txt"), "not a version")
        .expect("must write stray file");
}

#[test]
fn enumerate_lists_sorted_frameworks_and_sdks() {
    let root = test_root("enumerate");
    seed_install(&root);
    let layout = DotnetLayout::new(&root);

    let info = enumerate_environment(&layout).expect("must enumerate");

    assert_eq!(info.host_version, "8.0.11");
    assert_eq!(info.commit_hash, "9b8d1b7ba4ba4e1b5b0b0e2a41a4c1b6c4e3d1f2");

    let sdk_versions = info
        .sdks
        .iter()
        .map(|sdk| sdk.version.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        sdk_versions,
        vec!["6.0.428", "8.0.404", "9.0.100-rc.2.24474.11"]
    );
    assert_eq!(info.sdks[1].path, root.join("sdk").join("8.0.404"));

    let shared = root.join("shared");
    assert_eq!(
        info.frameworks,
        vec![
            InstalledFramework::new(
                "Microsoft.AspNetCore.App",
                shared.join("Microsoft.AspNetCore.App"),
                "8.0.11"
            ),
            InstalledFramework::new(
                "Microsoft.NETCore.App",
                shared.join("Microsoft.NETCore.App"),
                "6.0.36"
            ),
            InstalledFramework::new(
                "Microsoft.NETCore.App",
                shared.join("Microsoft.NETCore.App"),
                "8.0.2"
            ),
            InstalledFramework::new(
                "Microsoft.NETCore.App",
                shared.join("Microsoft.NETCore.App"),
                "8.0.11"
            ),
        ]
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn enumerate_keeps_framework_dirs_that_are_not_semver() {
    let root = test_root("short-versions");
    mkdirs(
        &root,
        &[
            "host/fxr/8.0.0",
            "sdk/NuGetFallbackFolder",
            "shared/Microsoft.NETCore.App/8.0",
            "shared/Microsoft.NETCore.App/8.0.3",
            "shared/Microsoft.NETCore.App/7.0.1",
            "shared/Microsoft.NETCore.App/local-build",
        ],
    );

    let info = enumerate_environment(&DotnetLayout::new(&root)).expect("must enumerate");

    let versions = info
        .frameworks
        .iter()
        .map(|framework| framework.version.as_str())
        .collect::<Vec<_>>();
    assert_eq!(versions, vec!["7.0.1", "8.0.3", "8.0", "local-build"]);
    assert_eq!(
        info.frameworks[2].install_dir(),
        root.join("shared").join("Microsoft.NETCore.App").join("8.0")
    );
    assert!(info.sdks.is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn enumerate_without_version_marker_reports_unknown_commit() {
    let root = test_root("no-marker");
    mkdirs(&root, &["host/fxr/8.0.0"]);

    let info = enumerate_environment(&DotnetLayout::new(&root)).expect("must enumerate");
    assert_eq!(info.commit_hash, "N/A");
    assert!(info.sdks.is_empty());
    assert!(info.frameworks.is_empty());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn enumerate_requires_host_resolver() {
    let root = test_root("no-host");
    mkdirs(&root, &["shared/Microsoft.NETCore.App/8.0.0"]);

    let err = enumerate_environment(&DotnetLayout::new(&root)).expect_err("must fail");
    assert!(matches!(err, LocateError::Discovery { .. }));
    assert!(
        err.to_string().contains("host resolver not found"),
        "unexpected error: {err}"
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn enumerate_rejects_missing_root() {
    let root = test_root("missing").join("does-not-exist");
    let err = enumerate_environment(&DotnetLayout::new(&root)).expect_err("must fail");
    assert!(matches!(err, LocateError::Discovery { .. }));
}

#[test]
fn locate_prefers_executable_hint() {
    let root = test_root("hint");
    let other = test_root("hint-other");
    let executable = root.join("dotnet");
    fs::write(&executable, "").expect("must write fake executable");

    let layout = locate_dotnet_root(
        Some(executable.as_path()),
        Some(other.as_os_str()),
        None,
        &[],
    )
    .expect("must locate");
    assert_eq!(
        layout.root(),
        fs::canonicalize(&root).expect("canonical root")
    );

    let _ = fs::remove_dir_all(&root);
    let _ = fs::remove_dir_all(&other);
}

#[cfg(unix)]
#[test]
fn locate_resolves_symlinked_executable() {
    let root = test_root("symlink-target");
    let links = test_root("symlink-links");
    let executable = root.join("dotnet");
    fs::write(&executable, "").expect("must write fake executable");
    let link = links.join("dotnet");
    std::os::unix::fs::symlink(&executable, &link).expect("must create symlink");

    let layout = locate_dotnet_root(Some(link.as_path()), None, None, &[]).expect("must locate");
    assert_eq!(
        layout.root(),
        fs::canonicalize(&root).expect("canonical root")
    );

    let _ = fs::remove_dir_all(&root);
    let _ = fs::remove_dir_all(&links);
}

#[test]
fn locate_uses_dotnet_root_before_path() {
    let root = test_root("env-root");
    let on_path = test_root("on-path");
    fs::write(on_path.join(if cfg!(windows) { "dotnet.exe" } else { "dotnet" }), "")
        .expect("must write fake executable");

    let path_var = std::env::join_paths([&on_path]).expect("must join PATH");
    let layout = locate_dotnet_root(None, Some(root.as_os_str()), Some(path_var.as_os_str()), &[])
        .expect("must locate");
    assert_eq!(layout.root(), root);

    let layout = locate_dotnet_root(None, Some(OsStr::new("")), Some(path_var.as_os_str()), &[])
        .expect("must locate");
    assert_eq!(
        layout.root(),
        fs::canonicalize(&on_path).expect("canonical path dir")
    );

    let _ = fs::remove_dir_all(&root);
    let _ = fs::remove_dir_all(&on_path);
}

#[test]
fn locate_falls_back_to_first_existing_default_root() {
    let existing = test_root("fallback");
    let missing = existing.join("missing");

    let layout = locate_dotnet_root(None, None, None, &[missing, existing.clone()])
        .expect("must locate");
    assert_eq!(layout.root(), existing);

    let _ = fs::remove_dir_all(&existing);
}

#[test]
fn locate_fails_when_nothing_is_found() {
    let err = locate_dotnet_root(None, None, None, &[]).expect_err("must fail");
    assert!(matches!(err, LocateError::Discovery { .. }));
    assert!(err.to_string().contains(DOTNET_ROOT_ENV), "unexpected error: {err}");
}

#[test]
fn locate_rejects_missing_hint() {
    let root = test_root("missing-hint");
    let err = locate_dotnet_root(Some(root.join("dotnet").as_path()), None, None, &[])
        .expect_err("missing hint must fail");
    assert!(matches!(err, LocateError::Discovery { .. }));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn default_install_roots_are_absolute() {
    assert!(!default_install_roots().is_empty());
    assert!(default_install_roots().iter().all(|root| root.is_absolute()));
}
