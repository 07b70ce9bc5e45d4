use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

const MAX_OP_WIDTH: usize = 60;

/// Colour of an operation label in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "work" => Colour::Green,
        "break" => Colour::Yellow,
        "lunch" => Colour::Cyan,
        "clock_out" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Cut the visible text of `s` to `max` characters, marking the cut with an ellipsis.
/// Escape sequences are dropped so they neither count nor get split.
pub fn truncate(s: &str, max: usize) -> String {
    let plain = strip_ansi(s);
    if plain.chars().count() <= max {
        return plain;
    }
    let kept: String = plain.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<usize> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(0);
        }

        // op+target in a single column, widths computed on plain text
        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let label = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&label, MAX_OP_WIDTH)
            })
            .collect();
        let messages: Vec<String> = entries.iter().map(|e| strip_ansi(&e.message)).collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((e, label), message) in entries.iter().zip(&labels).zip(&messages) {
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            // colour only the operation, keep the target plain
            let colored = match label.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation).paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(entries.len())
    }
}
