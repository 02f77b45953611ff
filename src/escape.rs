//! Visible-length measurement for strings carrying color escape sequences.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9]+m").expect("Invalid escape regex"));

/// Remove every `ESC[<digits>m` sequence from `s`.
pub fn strip(s: &str) -> Cow<'_, str> {
    ESCAPE_REGEX.replace_all(s, "")
}

/// Number of code points left in `s` once escape sequences are removed.
pub fn visible_len(s: &str) -> usize {
    strip(s).chars().count()
}
