use manta_config::app::RUN_CONFIG_FILE_NAME;
use manta_config::config::{Artifact, LIBEXEC_DIR_ENV};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn install_artifacts(root: &Path, skip: &[Artifact]) {
    fs::create_dir_all(root).expect("create libexec");
    for artifact in Artifact::ALL.into_iter().filter(|a| !skip.contains(a)) {
        fs::write(root.join(artifact.file_name()), b"").expect("write artifact");
    }
}

fn configure(libexec: &Path, cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_configure-manta"))
        .args(args)
        .current_dir(cwd)
        .env(LIBEXEC_DIR_ENV, libexec)
        .env_remove("RUST_LOG")
        .output()
        .expect("run binary")
}

#[test]
fn binary_writes_run_config_for_relative_run_dir() {
    let dir = tempdir().expect("tempdir");
    let libexec = dir.path().join("libexec");
    install_artifacts(&libexec, &[]);
    let work = dir.path().join("work");
    fs::create_dir_all(&work).expect("create work dir");

    let output = configure(&libexec, &work, &["--runDir", "myrun"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let run_dir = fs::canonicalize(&work).expect("canonical work").join("myrun");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("run_dir={}", run_dir.display())),
        "stdout: {stdout}"
    );
    assert!(run_dir.join(RUN_CONFIG_FILE_NAME).is_file());
}

#[test]
fn binary_exits_with_user_error_code_when_run_dir_is_missing() {
    let dir = tempdir().expect("tempdir");
    let libexec = dir.path().join("libexec");
    install_artifacts(&libexec, &[]);

    let output = configure(&libexec, dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must specify run directory"), "stderr: {stderr}");
}

#[test]
fn binary_reports_broken_install_without_creating_run_dir() {
    let dir = tempdir().expect("tempdir");
    let libexec = dir.path().join("libexec");
    install_artifacts(&libexec, &[Artifact::Tabix]);

    let output = configure(&libexec, dir.path(), &["--runDir", "out"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&libexec.join("tabix").display().to_string()),
        "stderr: {stderr}"
    );
    assert!(!dir.path().join("out").exists());
}

#[test]
fn binary_treats_missing_overrides_file_as_user_error() {
    let dir = tempdir().expect("tempdir");
    let libexec = dir.path().join("libexec");
    install_artifacts(&libexec, &[]);

    let output = configure(
        &libexec,
        dir.path(),
        &["--runDir", "out", "--config", "absent.yaml"],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read file"), "stderr: {stderr}");
    assert!(stderr.contains("--help"), "stderr: {stderr}");
}
