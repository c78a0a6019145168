use rusqlite::OptionalExtension;
use std::fs;

use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = store::count_rows(&pool.conn)?;
    println!(
        "{}• Attendance records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    if count == 0 {
        println!();
        return Ok(());
    }

    //
    // 3) PRESENT / ABSENT SPLIT
    //
    let present: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE status = 'Present'",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Present:{} {}", CYAN, RESET, present);
    println!("{}• Absent:{}  {}", CYAN, RESET, count - present);

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) DISTINCT LECTURERS SEEN
    //
    let lecturers: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT professor) FROM attendance",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Lecturers with records:{} {}", CYAN, RESET, lecturers);

    println!();
    Ok(())
}
