//! Colorful shell logger for command line apps.
//!
//! Prints a prefixed message, then a colored status marker aligned to a fixed
//! column on the same line:
//!
//! ```text
//!  ➯	Building app                                                  [ok]
//! ```

pub mod color;
pub mod escape;
pub mod logger;
pub mod symbol;

pub use color::Color;
pub use logger::{Config, Logger};
pub use symbol::Symbol;
