//! Common utility functions shared across the codebase.

/// Quote text as a single-quoted JavaScript string literal.
///
/// # Examples
///
/// ```
/// use bulbul::utils::quote_js_string;
///
/// assert_eq!(quote_js_string("src/a.js"), "'src/a.js'");
/// assert_eq!(quote_js_string("it's"), r"'it\'s'");
/// assert_eq!(quote_js_string(r"C:\src\a.js"), r"'C:\\src\\a.js'");
/// ```
pub fn quote_js_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
