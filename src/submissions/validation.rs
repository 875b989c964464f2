//! # Submission Validation
//!
//! Input checks shared by the HTTP handlers. The store itself never validates.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Lenient `local@domain.tld` shape: no whitespace, exactly one `@`,
/// and a `.` somewhere after it.
///
/// `\s` is Unicode White_Space, which excludes U+FEFF; an address carrying a
/// byte-order mark passes here even though a browser-side check rejects it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Check an address against the email heuristic
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Email check on a raw JSON value; only strings can match
pub fn is_valid_email_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_email)
}

/// Whether a submitted form value counts as filled in
///
/// `null`, `false`, `0` and `""` are empty. Whitespace-only strings,
/// other numbers, arrays and objects are present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// True when every field is supplied and present
pub fn require_fields(fields: &[Option<&Value>]) -> bool {
    fields.iter().all(|f| f.is_some_and(is_present))
}

/// Text stored for a form value: strings as-is, anything else as JSON
pub fn field_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
