#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Every test invocation runs in test mode, so the binary never reads the
/// developer's real config file or mirror.
pub fn rc() -> Command {
    let mut cmd = cargo_bin_cmd!("rollcall");
    cmd.arg("--test");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file, together with the mirror that test mode keeps beside it
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.mirror.csv", db_path)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and log a small dataset useful for many tests:
/// Raghu Sir ends at 6 present / 2 absent (75.0%),
/// Tanvi Mam at 1 present / 3 absent (25.0%).
pub fn init_db_with_data(db_path: &str) {
    rc().args(["--db", db_path, "init"]).assert().success();

    rc().args([
        "--db",
        db_path,
        "log",
        "--date",
        "2025-09-01",
        "Raghu Sir=3/1",
        "Tanvi Mam=1/3",
    ])
    .assert()
    .success();

    rc().args(["--db", db_path, "log", "--date", "2025-09-08", "Raghu Sir=3/1"])
        .assert()
        .success();
}
