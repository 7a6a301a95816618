//! Placeholder Rewriting - the dynamic WHERE-clause transform
//!
//! Turns a template with named placeholders (`?field`) into a positional
//! query plus its ordered argument list. Parameters that are missing, null,
//! empty strings or empty arrays drop their condition entirely, and the
//! dangling `AND`/`OR` connectors around it are scrubbed afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::params::Params;

/// Matches `?field` placeholders: letters, digits, underscores and dots.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?([\w\.]+)").expect("placeholder pattern is valid"));

/// Stand-in spliced where a condition vanishes, expanded to `1=1` before cleanup.
const VOID_MARKER: &str = "__PLACEHOLDER__";

/// Cleanup rules for leftover `1=1` fragments, applied in order as one
/// global literal replacement each.
const CLEANUP_RULES: [(&str, &str); 7] = [
    ("WHERE 1=1 AND ", "WHERE "),
    ("WHERE 1=1 OR ", "WHERE "),
    ("AND 1=1", ""),
    ("OR 1=1", ""),
    ("1=1 AND ", ""),
    ("1=1 OR ", ""),
    ("(1=1)", ""),
];

/// Rewrite named placeholders in a SQL template into positional markers.
///
/// Each `?field` occurrence is resolved against `params` in template order:
///
/// - missing key, `null`, `""` or `[]` make the condition vanish
/// - an array of n elements becomes `field IN (?,...)` binding n arguments
/// - any other value becomes `field = ?` binding one argument
///
/// Dropped conditions leave `1=1` behind, which the cleanup pass removes
/// together with the connector next to it. Text without placeholders passes
/// through untouched, so templates may span multiple lines and mix in
/// static conditions.
///
/// ```
/// use dynwhere::{params, rewrite};
///
/// let (sql, args) = rewrite(
///     "SELECT * FROM orders WHERE ?status AND ?ids",
///     &params! { "ids" => vec![7, 8] },
/// );
///
/// assert_eq!(sql, "SELECT * FROM orders WHERE ids IN (?,?)");
/// assert_eq!(args.len(), 2);
/// ```
pub fn rewrite(query: &str, params: &Params) -> (String, Vec<Value>) {
    let mut out = String::with_capacity(query.len());
    let mut args: Vec<Value> = Vec::new();
    let mut seen = 0usize;
    let mut cursor = 0;

    for caps in PLACEHOLDER_RE.captures_iter(query) {
        let (Some(full), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&query[cursor..full.start()]);
        cursor = full.end();
        seen += 1;

        let field = name.as_str();
        match params.get(field) {
            None | Some(Value::Null) => out.push_str(VOID_MARKER),
            Some(Value::String(s)) if s.is_empty() => out.push_str(VOID_MARKER),
            Some(Value::Array(items)) if items.is_empty() => out.push_str(VOID_MARKER),
            Some(Value::Array(items)) => {
                out.push_str(field);
                out.push_str(" IN (");
                for i in 0..items.len() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push('?');
                }
                out.push(')');
                args.extend(items.iter().cloned());
            }
            Some(value) => {
                out.push_str(field);
                out.push_str(" = ?");
                args.push(value.clone());
            }
        }
    }
    out.push_str(&query[cursor..]);

    let cleaned = cleanup(out.replace(VOID_MARKER, "1=1"));

    tracing::debug!(
        "rewrote query template: {} placeholders seen, {} args bound",
        seen,
        args.len()
    );

    (cleaned.trim().to_string(), args)
}

/// Scrub leftover `1=1` fragments. Rule order matters: the `WHERE`-anchored
/// rules must run before the bare connector rules, and a lone `1=1` keeping
/// a `WHERE` clause valid is left in place.
fn cleanup(mut query: String) -> String {
    for (needle, replacement) in CLEANUP_RULES {
        if query.contains(needle) {
            query = query.replace(needle, replacement);
        }
    }
    query
}
