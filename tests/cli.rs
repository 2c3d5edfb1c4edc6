use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_profile(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("profile.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_dry_run_prints_command_line() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempdir()?;
    let base_str = base.path().to_str().unwrap();

    let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
    cmd.arg("--dry-run").arg("--base-dir").arg(base.path());
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("ZX-Poly Emulator")
                .and(predicate::str::contains("-XX:+UseZGC\n-XX:+TieredCompilation\n"))
                .and(predicate::str::contains(format!("-Djava.library.path={}\n-jar\n", base_str)))
                .and(predicate::str::ends_with(format!(
                    "{}{}\n",
                    base_str,
                    zxpoly_launcher::profile::DEFAULT_PAYLOAD_PATH
                ))),
        );

    Ok(())
}

#[test]
fn test_missing_runtime_fails() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempdir()?;

    let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
    cmd.arg("--base-dir").arg(base.path());
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot start"));

    Ok(())
}

#[test]
fn test_invalid_profile_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let profile = write_profile(dir.path(), "{ not json");

    let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
    cmd.arg("--profile").arg(&profile).arg("--dry-run");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid launch profile"));

    Ok(())
}

#[test]
fn test_second_instance_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    use zxpoly_launcher::instance::{LockProvider, NamedLockProvider};

    let name = format!("zxpoly-cli-test-{}", std::process::id());
    let _held = NamedLockProvider::default().acquire(&name)?.expect("lock is free");

    let dir = tempdir()?;
    let profile = write_profile(dir.path(), &format!(r#"{{ "instance_lock_name": "{}" }}"#, name));

    let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
    cmd.arg("--profile").arg(&profile).arg("--dry-run");
    cmd.assert()
        .code(zxpoly_launcher::error::EXIT_ALREADY_RUNNING as i32)
        .stdout(predicate::str::contains("Application already started"));

    Ok(())
}

#[cfg(unix)]
mod with_runtime {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Fake runtime: records its arguments next to itself, then exits with `code`.
    fn install_runtime(base: &Path, code: i32) {
        let script = base.join("runtime.sh");
        fs::write(
            &script,
            format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\nexit {}\n", code),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_child_success_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
        let base = tempdir()?;
        install_runtime(base.path(), 0);
        let profile = write_profile(base.path(), r#"{ "runtime_path": "/runtime.sh", "payload_path": "/app.jar" }"#);

        let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
        cmd.arg("--profile").arg(&profile).arg("--base-dir").arg(base.path());
        cmd.assert().success();

        let args = fs::read_to_string(base.path().join("args.txt"))?;
        let lines: Vec<&str> = args.lines().collect();
        assert_eq!(lines[0], "-XX:+UseZGC");
        assert_eq!(lines[lines.len() - 2], "-jar");
        assert_eq!(lines[lines.len() - 1], format!("{}/app.jar", base.path().display()));

        Ok(())
    }

    #[test]
    fn test_child_failure_is_propagated() -> Result<(), Box<dyn std::error::Error>> {
        let base = tempdir()?;
        install_runtime(base.path(), 17);
        let profile = write_profile(base.path(), r#"{ "runtime_path": "/runtime.sh" }"#);

        let mut cmd = Command::cargo_bin("zxpoly-launcher")?;
        cmd.arg("--profile").arg(&profile).arg("--base-dir").arg(base.path());
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("Application completed with status: exit code 17"));

        Ok(())
    }
}
