use std::fmt;

/// Marker glyphs printed in front of messages and in the done banner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Heavy round-tipped rightwards arrow (U+27AF).
    Arrow,
    /// Thumbs up sign (U+1F44D).
    ThumbsUp,
    Custom(String),
}

impl Symbol {
    pub fn as_str(&self) -> &str {
        match self {
            Symbol::Arrow => "\u{27AF}",
            Symbol::ThumbsUp => "\u{1F44D}",
            Symbol::Custom(s) => s,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::Custom(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::Custom(s)
    }
}
