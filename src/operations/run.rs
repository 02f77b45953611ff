use std::process::Command;

use anyhow::{Context, Result};
use shlog::{message, Logger};

use crate::output::*;

/// Run `command` under a `label` step. Returns whether the command succeeded.
pub fn run_command(log: &mut Logger, label: &str, command: &[String]) -> Result<bool> {
    let (program, args) = command
        .split_first()
        .context("No command given to run")?;

    message!(log, "{}", label);

    let output = match Command::new(program).args(args).output() {
        Ok(o) => o,
        Err(e) => {
            log.err();
            return Err(e).with_context(|| format!("Failed to spawn `{}`", program));
        }
    };

    let success = output.status.success();
    log.result(success);

    if !success {
        let code = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        print_step(&format!("`{}` exited with {}", command.join(" "), code));
        print_captured("stderr", &String::from_utf8_lossy(&output.stderr));
    }

    Ok(success)
}
