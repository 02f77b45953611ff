use std::fmt;

/// ANSI terminal colors understood by the logger.
///
/// Each variant renders as its SGR escape sequence (`ESC[<code>m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Orange,
    Purple,
    Pink,
    Cyan,
    White,
    Grey,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Reset,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Orange,
        Color::Purple,
        Color::Pink,
        Color::Cyan,
        Color::White,
        Color::Grey,
    ];

    /// SGR parameter for this color.
    pub fn code(self) -> u8 {
        match self {
            Color::Reset => 0,
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Orange => 33,
            Color::Purple => 34,
            Color::Pink => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Grey => 90,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}
