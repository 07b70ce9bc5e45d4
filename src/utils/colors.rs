/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Grey for placeholder cells ("Active", "Ongoing", "--:--"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "Active" || v == "Ongoing" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Productivity color:
/// \>= 75 → green
/// \>= 50 → yellow
/// otherwise → red
pub fn color_for_productivity(value: f64) -> &'static str {
    if value >= 75.0 {
        GREEN
    } else if value >= 50.0 {
        YELLOW
    } else {
        RED
    }
}
