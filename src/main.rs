//! rCigarLog main entrypoint.

use rcigarlog::run;
use rcigarlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
