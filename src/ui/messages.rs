//! Iconed terminal feedback used by every command.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn tagged(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(BLUE, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(GREEN, "✅", msg));
}

/// Non-fatal: the command keeps going after one of these.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(RED, "❌", msg));
}

/// Banner above the dashboard and other multi-line reports.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}📋 {}{}", BLUE, BOLD, msg, RESET);
    println!("{}{}{}", BLUE, "─".repeat(44), RESET);
}
