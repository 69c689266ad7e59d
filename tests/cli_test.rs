//! Integration tests for the venv-shims binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

/// Write a fake interpreter that reports `major.minor` when probed.
fn fake_python(dir: &Path, name: &str, major: u32, minor: u32) {
    let path = dir.join(name);
    fs::write(
        &path,
        format!(
            "#!/bin/sh\nif [ \"$1\" = \"-c\" ]; then echo '[{}, {}, 0, \"final\", 0]'; exit 0; fi\nexit 1\n",
            major, minor
        ),
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// A root plus a shims listing containing the given fake runtimes.
fn setup_root(runtimes: &[(&str, u32, u32)]) -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    let shims = temp.path().join("shims");
    fs::create_dir(&shims).unwrap();

    let mut listing = String::new();
    for (name, major, minor) in runtimes {
        fake_python(&shims, name, *major, *minor);
        listing.push_str(&format!("{}\n", shims.join(name).display()));
    }
    // Non-runtime shims are ignored.
    listing.push_str(&format!("{}\n\n", shims.join("pip").display()));
    let listing_path = temp.path().join("shims.txt");
    fs::write(&listing_path, listing).unwrap();

    let command = format!("cat '{}'", listing_path.display());
    (temp, command)
}

fn venv_shims(root: &Path, shims_command: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.arg("--root")
        .arg(root)
        .arg("--shims-command")
        .arg(shims_command)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("virtualenv launchers"))
        .stdout(predicate::str::contains("--shims-command"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn plan_lists_runtimes_in_version_order() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[("python3.9", 3, 9), ("python2.7", 2, 7), ("pypy3", 3, 7)]);

    let output = venv_shims(temp.path(), &shims).arg("plan").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let labels: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(labels, vec!["2.7", "pypy3", "3.9"]);
    assert!(stdout.contains("virtualenv-16.7.9"));
    assert!(stdout.contains("virtualenv-20.14.1"));

    // Planning has no side effects.
    assert!(!temp.path().join("bin").exists());
    assert!(!temp.path().join("venvs").exists());
    Ok(())
}

#[test]
fn plan_json_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[("python3.6", 3, 6)]);

    let output = venv_shims(temp.path(), &shims)
        .args(["plan", "--json"])
        .output()?;
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let rows = plan.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["label"], "3.6");
    assert_eq!(rows[0]["version"], "3.6");
    assert_eq!(rows[0]["release"], "16.7.9");
    assert_eq!(rows[0]["installation"]["kind"], "script");
    Ok(())
}

#[test]
fn unsupported_runtime_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[("python3.9", 3, 9), ("python3.12", 3, 12)]);

    venv_shims(temp.path(), &shims)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("python3.12"))
        .stderr(predicate::str::contains("3.12"));

    assert!(!temp.path().join("bin").exists());
    Ok(())
}

#[test]
fn generate_without_runtimes_creates_directories() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[]);

    venv_shims(temp.path(), &shims)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Creating directory {}",
            temp.path().join("bin").display()
        )))
        .stdout(predicate::str::contains("Creating directory"));

    assert!(temp.path().join("bin").is_dir());
    assert!(temp.path().join("venvs").is_dir());
    Ok(())
}

#[test]
fn quiet_generate_hides_progress_lines() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[]);

    venv_shims(temp.path(), &shims)
        .args(["-q", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating directory").not())
        .stderr(predicate::str::contains("No supported runtimes found"));

    assert!(temp.path().join("bin").is_dir());
    assert!(temp.path().join("venvs").is_dir());
    Ok(())
}

#[test]
fn quiet_plan_still_prints_rows() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[("python2.7", 2, 7)]);

    venv_shims(temp.path(), &shims)
        .args(["--quiet", "plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("virtualenv-16.7.9"));
    Ok(())
}

#[test]
fn integrity_mismatch_exits_with_three() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[("python2.7", 2, 7)]);
    // An archive already in the root is used as-is, so nothing is downloaded.
    let archive = temp.path().join("virtualenv-16.7.9.tar.gz");
    fs::write(&archive, "not the real archive")?;

    venv_shims(temp.path(), &shims)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "The sha256 sum doesn't match for virtualenv-16.7.9",
        ));

    assert!(archive.exists());
    assert!(!temp.path().join("bin/virtualenv-2.7").exists());
    Ok(())
}

#[test]
fn failing_shims_command_exits_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    venv_shims(temp.path(), "exit 7")
        .arg("plan")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exit 7"));
    Ok(())
}

#[test]
fn root_can_come_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, shims) = setup_root(&[]);

    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.env("VENV_SHIMS_ROOT", temp.path())
        .env("VENV_SHIMS_COMMAND", &shims)
        .env("VENV_SHIMS_BIN_DIR", "launchers");
    cmd.assert().success();

    assert!(temp.path().join("launchers").is_dir());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("venv-shims"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("venv-shims"));
    Ok(())
}
