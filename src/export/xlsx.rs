// src/export/xlsx.rs

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::record::AttendanceRecord;
use crate::models::summary::LecturerSummary;
use crate::ui::messages::info;

const LOG_HEADERS: [&str; 5] = ["ID", "Date", "Timestamp", "Lecturer", "Outcome"];
const SUMMARY_HEADERS: [&str; 5] = [
    "Lecturer",
    "Total Classes",
    "Attended",
    "Missed",
    "Attendance %",
];

/// Two-sheet XLSX export: the raw ledger plus a per-lecturer summary whose
/// numbers match the dashboard exactly (same aggregation, same rounding).
pub fn export_xlsx(
    records: &[AttendanceRecord],
    summaries: &[LecturerSummary],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let logs = workbook.add_worksheet();
    logs.set_name("Daily Logs").map_err(to_app_error)?;
    let log_rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.format("%Y-%m-%d").to_string(),
                r.timestamp.format("%H:%M:%S").to_string(),
                r.lecturer.clone(),
                r.outcome.to_db_str().to_string(),
            ]
        })
        .collect();
    write_sheet(logs, &LOG_HEADERS, &log_rows)?;

    let summary = workbook.add_worksheet();
    summary.set_name("Summary Dashboard").map_err(to_app_error)?;
    let summary_rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.lecturer.clone(),
                s.total.to_string(),
                s.present.to_string(),
                s.absent.to_string(),
                format!("{:.1}%", s.percentage),
            ]
        })
        .collect();
    write_sheet(summary, &SUMMARY_HEADERS, &summary_rows)?;

    workbook.save(path_str(path)?).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one styled sheet: bold header row, banded body rows, column widths
/// sized to the widest cell.
fn write_sheet(worksheet: &mut Worksheet, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x8854D0))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF3EEFB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, row) in rows.iter().enumerate() {
        let row_num = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in row.iter().enumerate() {
            write_xlsx_cell(worksheet, row_num, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Write a single cell, keeping plain integers numeric so spreadsheet
/// formulas keep working on the export.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    if let Ok(num) = s.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
