//! End-to-end tests running the binary against a stubbed kubectl

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// Write an executable shell stub standing in for kubectl
fn write_stub(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("kubectl");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "#!/bin/sh\n{body}").unwrap();
    let mut perms = file.metadata().unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path.to_string_lossy().into_owned()
}

/// Stub that answers the resolve query with a deployment and the display
/// query with a plain table
fn cluster_stub(dir: &TempDir) -> String {
    write_stub(
        dir,
        r#"case "$1" in
  logs)
    shift
    echo "stub logs $*"
    ;;
  get)
    case "$*" in
      *--sort-by=*) printf '%s' 'web-7f9 Deployment' ;;
      *)
        echo 'NAME      READY   STATUS'
        echo 'web-7f9   1/1     Running'
        ;;
    esac
    ;;
esac"#,
    )
}

fn bin() -> Command {
    Command::cargo_bin("kubectl-latest").unwrap()
}

#[test]
fn test_help_prints_usage_and_exits_zero() {
    bin()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: kubectl-latest"))
        .stdout(predicate::str::contains("Verb: get"))
        .stdout(predicate::str::contains("Noun: all"))
        .stdout(predicate::str::contains("kubectl-latest describe svc"));
}

#[test]
fn test_get_latest_prints_trimmed_display_output() {
    let dir = TempDir::new().unwrap();
    let stub = cluster_stub(&dir);

    bin()
        .arg("deployment")
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .success()
        .stdout("NAME      READY   STATUS\nweb-7f9   1/1     Running\n");
}

#[test]
fn test_display_command_shape_passes_flags_through() {
    let dir = TempDir::new().unwrap();
    // Resolve answers with a service; the display query echoes its own
    // argument vector so the constructed command line is observable.
    let stub = write_stub(
        &dir,
        r#"case "$*" in
  *--sort-by=*) printf '%s' 'api Service' ;;
  *) echo "$*" ;;
esac"#,
    );

    bin()
        .args(["describe", "svc", "--show-events=false"])
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .success()
        .stdout("describe Service/api --show-events=false\n");
}

#[test]
fn test_logs_shortcut_targets_latest_pod() {
    let dir = TempDir::new().unwrap();
    let stub = cluster_stub(&dir);

    bin()
        .args(["logs", "-f"])
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .success()
        .stdout("stub logs web-7f9 -f\n");
}

#[test]
fn test_empty_lookup_is_a_clean_error() {
    let dir = TempDir::new().unwrap();
    let stub = write_stub(&dir, "exit 0");

    bin()
        .arg("deployment")
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("getting latest deployment"))
        .stderr(predicate::str::contains("no deployment resources found"));
}

#[test]
fn test_lookup_subprocess_failure_carries_diagnostics() {
    let dir = TempDir::new().unwrap();
    let stub = write_stub(&dir, "echo 'error: the server could not find the requested resource' >&2; exit 1");

    bin()
        .arg("widgets")
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("getting latest widgets"))
        .stderr(predicate::str::contains(
            "the server could not find the requested resource",
        ));
}

#[test]
fn test_display_failure_reports_both_streams() {
    let dir = TempDir::new().unwrap();
    let stub = write_stub(
        &dir,
        r#"case "$*" in
  *--sort-by=*) printf '%s' 'web-7f9 Deployment' ;;
  *) echo 'partial table'; echo 'connection reset' >&2; exit 1 ;;
esac"#,
    );

    bin()
        .arg("deployment")
        .env("KUBECTL_LATEST_BIN", &stub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("running get on Deployment/web-7f9"))
        .stderr(predicate::str::contains("partial table"))
        .stderr(predicate::str::contains("connection reset"));
}
