/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color for an attendance percentage against the target:
/// at/above target → green, below → red, no data → grey.
pub fn color_for_percentage(percentage: f64, target: f64, has_data: bool) -> &'static str {
    if !has_data {
        GREY
    } else if percentage >= target * 100.0 {
        GREEN
    } else {
        RED
    }
}
