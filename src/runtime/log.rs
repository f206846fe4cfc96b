//! The `Log` facade and its testable form, [`Logger`].

use std::io::{self, Write};

use serde_json::Value;

use super::location::{Origin, UNKNOWN_ORIGIN, split_location};
use super::style::{Cyan, OriginStyle};

/// Shape of [`Log::traceable`].
pub type TraceableFn = fn(Vec<Value>);

/// Logging facade whose calls are rewritten at build time.
///
/// The rewriter appends the file path and line as the last two arguments, so
/// `Log.traceable('User logged in', 42)` prints
/// `[src/auth.js:12] User logged in 42`.
pub struct Log;

impl Log {
    /// Print one line to stdout with the origin tag painted cyan.
    pub fn traceable(args: Vec<Value>) {
        let stdout = io::stdout();
        let mut logger = Logger::new(stdout.lock(), Cyan);
        logger.traceable(&args);
    }
}

/// Formats log invocations onto any writer with a chosen origin style.
pub struct Logger<W, S> {
    writer: W,
    style: S,
}

impl<W: Write, S: OriginStyle> Logger<W, S> {
    pub fn new(writer: W, style: S) -> Self {
        Self { writer, style }
    }

    /// Write one line. Write errors are dropped so logging never fails the caller.
    pub fn traceable(&mut self, args: &[Value]) {
        let line = format_line(args, &self.style);
        if let Err(err) = writeln!(self.writer, "{}", line) {
            tracing::trace!(%err, "dropped log line");
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a log invocation as `[origin] value value ...`.
///
/// Only a known `path:line` tag goes through `style`; `unknown` stays plain.
pub fn format_line(args: &[Value], style: &impl OriginStyle) -> String {
    let (origin, rest) = split_location(args);
    let tag = match &origin {
        Origin::Known(pair) => style.paint(&pair.to_string()),
        Origin::Unknown => UNKNOWN_ORIGIN.to_string(),
    };
    let mut line = format!("[{}]", tag);
    for value in rest {
        line.push(' ');
        line.push_str(&display_value(value));
    }
    line
}

/// Strings print as-is, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Log values with their call site.
///
/// Each argument is converted with `serde_json::json!`, so anything
/// serializable can be logged:
///
/// ```
/// bulbul::traceable!("user", 42, "src/auth.js", 12);
/// ```
#[macro_export]
macro_rules! traceable {
    ($($arg:expr),* $(,)?) => {
        $crate::runtime::Log::traceable(vec![$($crate::serde_json::json!($arg)),*])
    };
}
