use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_log_saves_expanded_rows() {
    let db_path = setup_test_db("log_saves_rows");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success();

    // 2 present + 1 absent for one lecturer, 1 absent for another = 4 rows
    rc().args([
        "--db",
        &db_path,
        "log",
        "--date",
        "2025-09-01",
        "Tanvi Mam=2/1",
        "Raghu Sir=0/1",
    ])
    .assert()
    .success()
    .stdout(contains("Saved 4 attendance records."));
}

#[test]
fn test_all_zero_counts_save_nothing() {
    let db_path = setup_test_db("log_zero_counts");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "log", "Tanvi Mam=0/0", "Raghu Sir=0"])
        .assert()
        .success()
        .stdout(contains("Nothing to save"));

    // the ledger stayed empty
    rc().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No attendance logged yet"));
}

#[test]
fn test_unknown_lecturer_is_rejected() {
    let db_path = setup_test_db("log_unknown_lecturer");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "log", "Nobody Sir=2"])
        .assert()
        .failure()
        .stderr(contains("Unknown lecturer"));
}

#[test]
fn test_counts_above_cap_are_clamped() {
    let db_path = setup_test_db("log_clamped");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success();

    // 99 present clamps to the default cap of 5; -3 absent clamps to 0
    rc().args(["--db", &db_path, "log", "Anoop Sir=99/-3"])
        .assert()
        .success()
        .stdout(contains("Saved 5 attendance records."));
}

#[test]
fn test_status_shows_meeting_and_below_advice() {
    let db_path = setup_test_db("status_advice");
    init_db_with_data(&db_path);

    // Raghu Sir: 6 of 8 = exactly 75.0%, zero bunks to spare.
    // Tanvi Mam: 1 of 4 = 25.0%, needs 8 straight: (1+8)/(4+8) = 75%.
    rc().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("75.0%"))
        .stdout(contains("Safe to bunk 0"))
        .stdout(contains("25.0%"))
        .stdout(contains("Attend next 8"));
}

#[test]
fn test_status_lists_lecturers_without_records() {
    let db_path = setup_test_db("status_full_roster");
    init_db_with_data(&db_path);

    // never logged, but still on the dashboard
    rc().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("CM Sir"))
        .stdout(contains("No data yet"));
}

#[test]
fn test_audit_log_records_saves() {
    let db_path = setup_test_db("audit_records_saves");
    init_db_with_data(&db_path);

    // first batch expands to 8 rows, second to 4
    rc().args(["--db", &db_path, "audit", "--print"])
        .assert()
        .success()
        .stdout(contains("Saved 8 records"))
        .stdout(contains("Saved 4 records"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info_counts");
    init_db_with_data(&db_path);

    rc().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Attendance records"))
        .stdout(contains("12"));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = setup_test_db("db_check_fresh");

    rc().args(["--db", &db_path, "init"])
        .assert()
        .success();

    rc().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity OK"));
}

#[test]
fn test_mode_keeps_the_mirror_beside_the_db() {
    let db_path = setup_test_db("mirror_beside_db");

    rc().args(["--db", &db_path, "init"]).assert().success();

    // restore-on-empty must read this file, not anything under $HOME
    let mirror = format!("{}.mirror.csv", db_path);
    fs::write(
        &mirror,
        "id,date,timestamp,lecturer,outcome\n7,2025-08-20,10:00:00,Dhaval Sir,Present\n",
    )
    .unwrap();

    rc().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Dhaval Sir"))
        .stdout(contains("(1/1)"));
}

#[test]
fn test_config_check_reports_defaults() {
    let db_path = setup_test_db("config_check");

    rc().args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("9 lecturers"))
        .stdout(contains("target 75%"));
}
