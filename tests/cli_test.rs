//! Integration tests for the nbdeps binary.
//!
//! Installed packages come from a fake `site-packages` directory so no
//! Python interpreter is needed.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NOTEBOOK: &str = r##"{
  "nbformat": 4,
  "metadata": {},
  "cells": [
    {"cell_type": "markdown", "source": ["# Analysis\n", "import nothing_here\n"]},
    {"cell_type": "code", "execution_count": 1, "outputs": [],
     "source": ["import numpy as np\n", "from pandas.core import frame\n"]},
    {"cell_type": "code", "execution_count": 2, "outputs": [],
     "source": ["import seaborn as sns\n"]}
  ]
}"##;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("nb.ipynb"), NOTEBOOK).unwrap();
    let site_packages = temp.path().join("site-packages");
    fs::create_dir_all(site_packages.join("numpy-1.26.4.dist-info")).unwrap();
    fs::create_dir_all(site_packages.join("pandas-2.2.1.dist-info")).unwrap();
    temp
}

fn nbdeps(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("nbdeps"));
    cmd.current_dir(temp.path());
    cmd.env_remove("NBDEPS_PYTHON");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbdeps"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Jupyter notebook"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbdeps"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_scan_lists_top_level_modules() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args(["scan", "nb.ipynb"])
        .assert()
        .success()
        .stdout(predicate::eq("numpy\npandas\nseaborn\n"));
    Ok(())
}

#[test]
fn cli_check_without_install_reports_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--no-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping installation of seaborn."))
        .stdout(predicate::str::contains("1.26.4"))
        .stdout(predicate::str::contains("2.2.1"))
        .stdout(predicate::str::contains("3 modules, 1 missing"));
    Ok(())
}

#[test]
fn cli_check_reprompts_on_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--non-interactive",
        ])
        .write_stdin("maybe\nNO\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Do you want to install seaborn v. 0.12.1? (yes/no)",
        ))
        .stdout(predicate::str::contains("Invalid input. Please enter 'yes' or 'no'."))
        .stdout(predicate::str::contains("Skipping installation of seaborn."));
    Ok(())
}

#[test]
#[cfg(unix)]
fn cli_check_reports_install_failure_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--python",
            "false",
            "--non-interactive",
        ])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing seaborn==0.12.1..."))
        .stdout(predicate::str::contains("Failed to install seaborn==0.12.1."))
        .stderr(predicate::str::contains("Failed to install").not());
    Ok(())
}

#[test]
fn cli_check_json_keeps_prompts_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--non-interactive",
            "--format",
            "json",
        ])
        .write_stdin("maybe\nno\n")
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report.as_array().map(|a| a.len()), Some(3));
    assert_eq!(report[2]["action"], "skipped");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Do you want to install seaborn v. 0.12.1?"));
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("Skipping installation of seaborn."));
    Ok(())
}

#[test]
fn cli_check_fails_when_input_closes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--non-interactive",
        ])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));
    Ok(())
}

#[test]
fn cli_check_json_and_csv() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--no-install",
            "--quiet",
            "--format",
            "json",
            "--output",
            "report.csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"module\": \"seaborn\""));

    let csv = fs::read_to_string(temp.path().join("report.csv"))?;
    assert!(csv.contains("numpy,true,1.26.4,-"));
    assert!(csv.contains("seaborn,false,,skipped"));
    Ok(())
}

#[test]
fn cli_check_strict_exits_with_missing_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args([
            "check",
            "nb.ipynb",
            "--site-packages",
            "site-packages",
            "--no-install",
            "--strict",
        ])
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn cli_check_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    fs::write(
        temp.path().join("nbdeps.yml"),
        "install: never\nsite_packages:\n  - site-packages\n",
    )?;
    nbdeps(&temp)
        .args(["check", "nb.ipynb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping installation of seaborn."));
    Ok(())
}

#[test]
fn cli_missing_notebook_exits_with_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbdeps(&temp)
        .args(["scan", "missing.ipynb"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Notebook not found"));
    Ok(())
}

#[test]
fn cli_missing_notebook_checked_before_site_packages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbdeps(&temp)
        .args([
            "check",
            "missing.ipynb",
            "--site-packages",
            "no-such-dir",
            "--no-install",
        ])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn cli_malformed_notebook_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("bad.ipynb"), "{\"cells\": 3}")?;
    nbdeps(&temp)
        .args(["scan", "bad.ipynb"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse notebook"));
    Ok(())
}

#[test]
fn cli_invalid_pin_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    nbdeps(&temp)
        .args(["check", "nb.ipynb", "--pin", "numpy"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid pin 'numpy'"));
    Ok(())
}
