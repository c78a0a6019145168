use crate::backup::{SyncOutcome, Synchronizer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::store::{self, SessionCounts};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Record one batch of attendance counts, then push the backup snapshot.
/// A failed push is a warning, never a rollback: the local save already
/// succeeded and attendance data must not be lost because backup failed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        entries,
        date: date_arg,
        no_sync,
    } = cmd
    {
        let session_date = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let parsed = parse_entries(entries, cfg)?;
        if parsed.iter().all(|(_, counts)| counts.is_empty()) {
            warning("Nothing to save: all counts are zero.");
            return Ok(());
        }

        let mut pool = db::open_store(cfg)?;
        let inserted =
            store::append_counts(&mut pool.conn, &parsed, session_date, date::now_time())?;
        success(format!("Saved {} attendance records.", inserted));

        let _ = db::log::audit(
            &pool.conn,
            "log",
            "attendance",
            &format!("Saved {} records for {}", inserted, session_date),
        );

        if *no_sync {
            return Ok(());
        }

        let records = store::load_all(&pool.conn)?;
        match Synchronizer::from_config(cfg).sync(&records) {
            Ok(SyncOutcome::Skipped) => {} // no remote configured: silent by design
            Ok(SyncOutcome::Created) => success("Backup created on remote."),
            Ok(SyncOutcome::Updated) => success("Backup updated on remote."),
            Err(e) => warning(format!("Backup failed (local data is safe): {}", e)),
        }
    }

    Ok(())
}

/// Parse and validate all entries before anything touches the store.
fn parse_entries(raw: &[String], cfg: &Config) -> AppResult<Vec<(String, SessionCounts)>> {
    raw.iter().map(|s| parse_entry(s, cfg)).collect()
}

/// One entry: "Lecturer=PRESENT[/ABSENT]". The lecturer must be on the
/// configured roster; counts are clamped to [0, max_per_session] here so the
/// store can trust its input.
fn parse_entry(s: &str, cfg: &Config) -> AppResult<(String, SessionCounts)> {
    let (name, counts) = s
        .split_once('=')
        .ok_or_else(|| AppError::InvalidEntry(s.to_string()))?;
    let name = name.trim();

    if !cfg.lecturers.iter().any(|l| l == name) {
        return Err(AppError::UnknownLecturer(name.to_string()));
    }

    let (present_str, absent_str) = match counts.split_once('/') {
        Some((p, a)) => (p, a),
        None => (counts, "0"),
    };

    let present: i64 = present_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidEntry(s.to_string()))?;
    let absent: i64 = absent_str
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidEntry(s.to_string()))?;

    // negative guard + per-session cap, before the store sees anything
    let max = cfg.max_per_session as i64;
    Ok((
        name.to_string(),
        SessionCounts {
            present: present.clamp(0, max) as u32,
            absent: absent.clamp(0, max) as u32,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn plain_entry_defaults_absent_to_zero() {
        let (name, counts) = parse_entry("Tanvi Mam=2", &cfg()).unwrap();
        assert_eq!(name, "Tanvi Mam");
        assert_eq!(counts, SessionCounts { present: 2, absent: 0 });
    }

    #[test]
    fn present_and_absent_are_both_parsed() {
        let (_, counts) = parse_entry("Raghu Sir=1/3", &cfg()).unwrap();
        assert_eq!(counts, SessionCounts { present: 1, absent: 3 });
    }

    #[test]
    fn counts_are_clamped_to_the_session_cap() {
        let (_, counts) = parse_entry("Raghu Sir=99/-4", &cfg()).unwrap();
        assert_eq!(counts, SessionCounts { present: 5, absent: 0 });
    }

    #[test]
    fn unknown_lecturer_is_rejected() {
        assert!(matches!(
            parse_entry("Nobody Sir=1", &cfg()),
            Err(AppError::UnknownLecturer(_))
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_entry("Tanvi Mam", &cfg()),
            Err(AppError::InvalidEntry(_))
        ));
        assert!(matches!(
            parse_entry("Tanvi Mam=two", &cfg()),
            Err(AppError::InvalidEntry(_))
        ));
    }
}
