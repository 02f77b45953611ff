use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shlog",
    version,
    about = "Colorful shell logger with aligned status markers",
    long_about = "Prints prefixed step messages followed by an ok/err marker aligned\n\
                  to a fixed column, and a closing done banner."
)]
pub struct Cli {
    /// Column the status marker is aligned to
    #[arg(long, global = true, default_value_t = 70, allow_negative_numbers = true)]
    pub padding: isize,

    /// Disable color escape sequences
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a scripted build session showing aligned markers
    Demo,

    /// Run a command and mark its step ok or err by exit status
    Run {
        /// Message printed before the command runs
        #[arg(long)]
        label: String,

        /// Command and arguments to execute
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print a single message with a status marker
    Status {
        /// Message text
        text: String,

        /// Mark the step as failed instead of ok
        #[arg(long)]
        err: bool,
    },
}
