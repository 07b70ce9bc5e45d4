//! dutylog main entrypoint.

use dutylog::run;
use dutylog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
