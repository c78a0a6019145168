//! Restore-on-empty through the same store-opening path the CLI uses.

use std::fs;

use rollcall::config::Config;
use rollcall::db::{self, store};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        database: dir.path().join("att.sqlite").to_string_lossy().to_string(),
        mirror_file: dir.path().join("mirror.csv").to_string_lossy().to_string(),
        ..Config::default()
    }
}

const SNAPSHOT: &str = "id,date,timestamp,lecturer,outcome\n\
    4,2025-08-20,10:15:00,Dhaval Sir,Present\n\
    5,2025-08-20,10:15:00,Dhaval Sir,Absent\n\
    11,2025-08-27,09:40:00,Ritesh Mam,Present\n";

#[test]
fn empty_store_is_rebuilt_from_the_mirror() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    fs::write(&cfg.mirror_file, SNAPSHOT).unwrap();

    let pool = db::open_store(&cfg).unwrap();
    let records = store::load_all(&pool.conn).unwrap();

    assert_eq!(records.len(), 3);
    // identity from the snapshot, not renumbered
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 5, 11]);
    assert_eq!(records[2].lecturer, "Ritesh Mam");
}

#[test]
fn restore_runs_at_most_once() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    fs::write(&cfg.mirror_file, SNAPSHOT).unwrap();

    {
        let pool = db::open_store(&cfg).unwrap();
        assert_eq!(store::count_rows(&pool.conn).unwrap(), 3);
    }

    // second start: ledger is non-empty, the mirror must be ignored
    let pool = db::open_store(&cfg).unwrap();
    assert_eq!(store::count_rows(&pool.conn).unwrap(), 3);
}

#[test]
fn corrupt_mirror_degrades_to_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);
    fs::write(&cfg.mirror_file, "id,date\nnot,a,snapshot\n").unwrap();

    let pool = db::open_store(&cfg).unwrap();
    assert_eq!(store::count_rows(&pool.conn).unwrap(), 0);
}

#[test]
fn missing_mirror_starts_empty_without_errors() {
    let dir = TempDir::new().unwrap();
    let cfg = test_config(&dir);

    let pool = db::open_store(&cfg).unwrap();
    assert_eq!(store::count_rows(&pool.conn).unwrap(), 0);
}
