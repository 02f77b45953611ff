use shlog::{message, Logger};

pub fn run_status(log: &mut Logger, text: &str, failed: bool) {
    message!(log, "{}", text);
    log.result(!failed);
}
