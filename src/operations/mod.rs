pub mod demo;
pub mod run;
pub mod status;

use shlog::Logger;

/// Logger configured from the global command-line flags.
pub fn logger(padding: isize, colorize: bool) -> Logger {
    let mut log = Logger::new();
    log.config.padding = padding;
    log.config.colorize = colorize;
    log
}
