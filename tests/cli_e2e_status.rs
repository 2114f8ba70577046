//! End-to-end tests for the `status` command.

mod common;
use common::prelude::*;

/// Test that status reports an empty project
#[test]
fn test_status_no_references() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No library references found"));
}

/// Test that status lists references with revision and state
#[test]
fn test_status_lists_references() {
    let fixture = TestFixture::new()
        .with_reference("app.lib", "https://git/app#abc123")
        .with_reference("drivers/sensor.lib", "https://git/sensor")
        .with_dir("drivers/sensor");

    fixture
        .command()
        .arg("--color")
        .arg("never")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://git/app @ abc123  [unresolved]"))
        .stdout(predicate::str::contains(
            "https://git/sensor @ default branch  [resolved]",
        ))
        .stdout(predicate::str::contains("2 libraries, 1 unresolved"));
}

/// Test that status honours the reference extension from .libref.yaml
#[test]
fn test_status_uses_configured_extension() {
    let fixture = TestFixture::new()
        .with_config("reference_extension: ref\n")
        .with_reference("app.ref", "https://git/app")
        .with_reference("ignored.lib", "https://git/ignored");

    fixture
        .command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://git/app"))
        .stdout(predicate::str::contains("https://git/ignored").not());
}

/// Test that status skips references under ignore paths
#[test]
fn test_status_skips_ignored_paths() {
    let fixture = TestFixture::new()
        .with_reference("mbed-os/usb.lib", "https://git/usb")
        .with_reference("extra/thing.lib", "https://git/thing")
        .with_reference("app.lib", "https://git/app");

    fixture
        .command()
        .arg("status")
        .arg("--ignore")
        .arg("extra")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://git/app"))
        .stdout(predicate::str::contains("https://git/usb").not())
        .stdout(predicate::str::contains("https://git/thing").not())
        .stdout(predicate::str::contains("Ignoring: mbed-os, extra"));
}
