use shlog::{message, Color, Logger};

use crate::output::*;

const STEPS: &[(&str, bool)] = &[
    ("Fetching dependencies", true),
    ("Compiling sources", true),
    ("Running unit tests", true),
    ("Linting", false),
    ("Packaging release archive", true),
];

pub fn run_demo(log: &mut Logger) {
    print_header("shlog demo");

    for (step, success) in STEPS {
        message!(log, "{}", step);
        log.result(*success);
    }

    // Escape sequences inside the message do not shift the marker column.
    let (on, off) = if log.config.colorize {
        (Color::Purple.to_string(), Color::Reset.to_string())
    } else {
        (String::new(), String::new())
    };
    message!(log, "Uploading to {}registry.example.com{}", on, off);
    log.ok();

    message!(log, "Cleaning up");
    log.status(Color::Orange, "skip");

    log.done();
    print_step("Markers above line up regardless of embedded colors.");
}
