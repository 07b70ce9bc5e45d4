use ansi_term::Colour;
use dutylog::core::log::{strip_ansi, truncate};

#[test]
fn strip_ansi_removes_colour_codes() {
    let painted = Colour::Green.paint("work").to_string();
    assert_ne!(painted, "work");
    assert_eq!(strip_ansi(&painted), "work");
    assert_eq!(strip_ansi("plain (u1@2025-10-01)"), "plain (u1@2025-10-01)");
}

#[test]
fn truncate_counts_visible_characters_only() {
    let painted = format!("{} (u1@2025-10-01)", Colour::Red.paint("clock_out"));

    // 25 visible characters: fits although the raw string is longer
    assert!(painted.chars().count() > 25);
    assert_eq!(truncate(&painted, 25), "clock_out (u1@2025-10-01)");

    assert_eq!(truncate(&painted, 10), "clock_out…");
    assert_eq!(truncate("short", 60), "short");
}
