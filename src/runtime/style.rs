//! Presentation of the origin tag.

use colored::Colorize;

/// Paints the text inside the `[...]` tag.
pub trait OriginStyle {
    fn paint(&self, origin: &str) -> String;
}

/// No decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl OriginStyle for Plain {
    fn paint(&self, origin: &str) -> String {
        origin.to_string()
    }
}

/// Cyan text, subject to `colored`'s `NO_COLOR` and `CLICOLOR` handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cyan;

impl OriginStyle for Cyan {
    fn paint(&self, origin: &str) -> String {
        origin.cyan().to_string()
    }
}
