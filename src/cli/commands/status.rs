use crate::config::Config;
use crate::core::advisor::{advise, Standing};
use crate::core::aggregate::aggregate;
use crate::db;
use crate::db::store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_percentage, GREEN, GREY, MAGENTA, RED, RESET};

const BAR_WIDTH: usize = 20;

/// Render the attendance dashboard: overall metrics plus one card per
/// configured lecturer, each with its attend/bunk advice.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = db::open_store(cfg)?;
    let records = store::load_all(&pool.conn)?;

    if records.is_empty() {
        info("No attendance logged yet. Use `rollcall log` to add your first entry.");
        return Ok(());
    }

    let (overall, summaries) = aggregate(&records, &cfg.lecturers);

    header("Attendance dashboard");

    let overall_color = color_for_percentage(overall.percentage, cfg.target, overall.total > 0);
    println!(
        "  Attendance: {}{:.1}%{}   Total classes: {}   Present: {}{}{}   Missed: {}{}{}",
        overall_color, overall.percentage, RESET,
        overall.total,
        GREEN, overall.present, RESET,
        RED, overall.absent, RESET,
    );
    println!();

    let name_width = summaries
        .iter()
        .map(|s| s.lecturer.chars().count())
        .max()
        .unwrap_or(0);

    for s in &summaries {
        let advice = advise(s.present, s.total, cfg.target);

        let color = color_for_percentage(advice.percentage, cfg.target, s.total > 0);
        let message = match advice.standing {
            Standing::NoData => format!("{}No data yet{}", GREY, RESET),
            Standing::Meeting => format!("{}Safe to bunk {}{}", MAGENTA, advice.advisory, RESET),
            Standing::Below if advice.advisory == u32::MAX => {
                format!("{}Target needs perfect attendance{}", RED, RESET)
            }
            Standing::Below => format!("{}Attend next {}{}", RED, advice.advisory, RESET),
        };

        println!(
            "  {:<name_width$}  {} {}{:>5.1}%{}  ({}/{})  {}",
            s.lecturer,
            progress_bar(advice.percentage),
            color,
            advice.percentage,
            RESET,
            s.present,
            s.total,
            message,
        );
    }

    println!();
    Ok(())
}

fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
