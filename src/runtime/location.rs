//! Recovery of the trailing location pair from a log invocation.

use std::fmt;

use serde_json::Value;

/// Marker printed when a call carries no valid location.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// 2^64, the first integral float a `u64` cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A strictly positive whole line number.
///
/// Lines up to `u64::MAX` are held exactly. Larger integral floats such as
/// `1e25` are kept as floats and printed the way a JS runtime prints them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineNumber {
    Exact(u64),
    Large(f64),
}

impl LineNumber {
    /// Accept any number that is integral and at least 1.
    pub fn from_number(number: &serde_json::Number) -> Option<Self> {
        if let Some(line) = number.as_u64() {
            return (line > 0).then_some(LineNumber::Exact(line));
        }

        let float = number.as_f64()?;
        if !float.is_finite() || float.fract() != 0.0 || float < 1.0 {
            return None;
        }
        if float < U64_LIMIT {
            Some(LineNumber::Exact(float as u64))
        } else {
            Some(LineNumber::Large(float))
        }
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineNumber::Exact(line) => write!(f, "{}", line),
            // JS switches to exponent notation from 1e21 on
            LineNumber::Large(line) if *line < 1e21 => write!(f, "{:.0}", line),
            LineNumber::Large(line) => {
                let exponent = format!("{:e}", line);
                f.write_str(&exponent.replacen('e', "e+", 1))
            }
        }
    }
}

/// A validated `path`, `line` pair taken from the end of the arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPair {
    pub path: String,
    pub line: LineNumber,
}

impl LocationPair {
    /// Validate a candidate pair.
    ///
    /// The path must be a non-empty string. The line must be a number with an
    /// integral value of at least 1; `10.0` is accepted as `10`, while `0`,
    /// `-3` and `1.5` are not.
    pub fn from_values(path: &Value, line: &Value) -> Option<Self> {
        let Value::String(path) = path else {
            return None;
        };
        if path.is_empty() {
            return None;
        }
        let Value::Number(line) = line else {
            return None;
        };

        Some(Self {
            path: path.clone(),
            line: LineNumber::from_number(line)?,
        })
    }
}

impl fmt::Display for LocationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Where a log line came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Known(LocationPair),
    Unknown,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Known(pair) => pair.fmt(f),
            Origin::Unknown => f.write_str(UNKNOWN_ORIGIN),
        }
    }
}

/// Split a log invocation into its origin and the values left to print.
///
/// With fewer than two values there is no pair to find. When the last two
/// values fail validation every value is kept.
pub fn split_location(values: &[Value]) -> (Origin, &[Value]) {
    let [rest @ .., path, line] = values else {
        return (Origin::Unknown, values);
    };

    match LocationPair::from_values(path, line) {
        Some(pair) => (Origin::Known(pair), rest),
        None => (Origin::Unknown, values),
    }
}
