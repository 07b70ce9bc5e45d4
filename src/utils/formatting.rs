//! Formatting utilities used for CLI and export outputs.

use crate::models::status::AttendanceStatus;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        // es: 02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Percentage with one decimal, e.g. `83.3%`.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Text label and ANSI color for an attendance status.
pub fn describe_status(status: AttendanceStatus) -> (&'static str, &'static str) {
    match status {
        AttendanceStatus::Offline => ("Offline", "\x1b[90m"),
        AttendanceStatus::Working => ("Working", "\x1b[32m"),
        AttendanceStatus::OnBreak => ("On break", "\x1b[33m"),
        AttendanceStatus::OnLunch => ("On lunch", "\x1b[35m"),
    }
}

/// Horizontal separator made of `ch` repeated `width` times.
pub fn separator(ch: &str, width: usize) -> String {
    ch.chars().next().unwrap_or('-').to_string().repeat(width)
}
