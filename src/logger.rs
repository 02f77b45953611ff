use std::fmt;
use std::io::{self, Stdout, Write};

use crate::color::Color;
use crate::escape;
use crate::symbol::Symbol;

/// Display options for a [`Logger`]. Every field may be changed at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Column the status marker is aligned to. Zero or negative disables padding.
    pub padding: isize,
    pub prefix_color: Color,
    pub prefix_symbol: Symbol,
    pub ok_color: Color,
    pub error_color: Color,
    pub ok_text: String,
    pub error_text: String,
    pub done_text: String,
    pub done_symbol: Symbol,
    pub left_delim: String,
    pub right_delim: String,
    /// Emit color escape sequences. When false the output is plain text with
    /// identical alignment.
    pub colorize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            padding: 70,
            prefix_color: Color::Cyan,
            prefix_symbol: Symbol::Arrow,
            ok_color: Color::Green,
            error_color: Color::Red,
            ok_text: "ok".to_string(),
            error_text: "err".to_string(),
            done_text: "All done".to_string(),
            done_symbol: Symbol::ThumbsUp,
            left_delim: "[".to_string(),
            right_delim: "]".to_string(),
            colorize: true,
        }
    }
}

/// Two-phase line printer: a prefixed message, then a status marker aligned
/// to [`Config::padding`] on the same line.
///
/// Alignment ignores color escape sequences embedded in the message. A
/// `Logger` is meant for sequential use; interleaving calls from several
/// threads (behind a lock) still mixes up the stored message length.
pub struct Logger<W: Write = Stdout> {
    pub config: Config,
    last_visible_len: usize,
    out: W,
}

impl Logger<Stdout> {
    /// Logger with the default configuration writing to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Logger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Logger<W> {
    pub fn with_writer(out: W) -> Self {
        Self::with_config(Config::default(), out)
    }

    pub fn with_config(config: Config, out: W) -> Self {
        Self {
            config,
            last_visible_len: 0,
            out,
        }
    }

    /// Visible length of the last message, zero before the first one.
    pub fn last_visible_len(&self) -> usize {
        self.last_visible_len
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the prefix and the formatted message, leaving the cursor on the
    /// line for a following [`status`](Self::status). See also [`message!`](crate::message).
    pub fn message(&mut self, args: fmt::Arguments<'_>) {
        let msg = fmt::format(args);
        let color = self.sgr(self.config.prefix_color);
        let reset = self.sgr(Color::Reset);
        let _ = write!(
            self.out,
            "{} {}\t{}{}",
            color, self.config.prefix_symbol, reset, msg
        );
        let _ = self.out.flush();
        self.last_visible_len = escape::visible_len(&msg);
    }

    /// Print `text` between the delimiters, right-aligned so the left
    /// delimiter ends at the configured column, and end the line.
    pub fn status(&mut self, color: Color, text: &str) {
        let last = isize::try_from(self.last_visible_len).unwrap_or(isize::MAX);
        let width = usize::try_from(self.config.padding.saturating_sub(last)).unwrap_or(0);
        let color = self.sgr(color);
        let reset = self.sgr(Color::Reset);
        let _ = writeln!(
            self.out,
            "{:>width$}{}{}{}{}",
            self.config.left_delim,
            color,
            text,
            reset,
            self.config.right_delim,
            width = width
        );
        let _ = self.out.flush();
    }

    pub fn ok(&mut self) {
        let text = self.config.ok_text.clone();
        self.status(self.config.ok_color, &text);
    }

    pub fn err(&mut self) {
        let text = self.config.error_text.clone();
        self.status(self.config.error_color, &text);
    }

    /// [`ok`](Self::ok) when `success` holds, [`err`](Self::err) otherwise.
    pub fn result(&mut self, success: bool) {
        if success {
            self.ok();
        } else {
            self.err();
        }
    }

    /// Print the closing banner. Independent of any earlier message.
    pub fn done(&mut self) {
        let _ = write!(
            self.out,
            "\n {}\t{}\n\n",
            self.config.done_symbol, self.config.done_text
        );
        let _ = self.out.flush();
    }

    fn sgr(&self, color: Color) -> String {
        if self.config.colorize {
            color.to_string()
        } else {
            String::new()
        }
    }
}

/// Format a message and print it through a [`Logger`].
///
/// ```no_run
/// let mut log = shlog::Logger::new();
/// shlog::message!(log, "Building {}", "app");
/// log.ok();
/// ```
#[macro_export]
macro_rules! message {
    ($logger:expr, $($arg:tt)*) => {
        $logger.message(::std::format_args!($($arg)*))
    };
}
