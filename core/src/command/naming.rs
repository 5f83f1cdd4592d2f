//! Token -> method name convention.
//!
//! A command token such as `clear-cache` resolves to the method name
//! `ClearCacheCmd`. Every app and every lookup goes through [`method_name`],
//! so registering `clear_cache` and looking up `clear-cache` meet in the
//! middle.

pub const METHOD_SUFFIX: &str = "Cmd";

/// Camel-cases a word-style token.
///
/// `_`, ` `, `-` and `.` start a new word and are dropped. Other punctuation
/// is dropped without starting a word. A digit capitalizes the next letter,
/// and a run of capitals is folded (`CONSTANT_CASE` -> `ConstantCase`).
pub fn to_camel(token: &str) -> String {
    let s = token.trim();
    let mut out = String::with_capacity(s.len());
    let mut cap_next = true;
    let mut prev_is_cap = false;

    for (i, b) in s.bytes().enumerate() {
        let is_cap = b.is_ascii_uppercase();
        let is_low = b.is_ascii_lowercase();

        let mut v = b;
        if cap_next {
            if is_low {
                v = b.to_ascii_uppercase();
            }
        } else if i == 0 {
            if is_cap {
                v = b.to_ascii_lowercase();
            }
        } else if prev_is_cap && is_cap {
            v = b.to_ascii_lowercase();
        }
        prev_is_cap = is_cap;

        if is_cap || is_low {
            out.push(v as char);
            cap_next = false;
        } else if b.is_ascii_digit() {
            out.push(v as char);
            cap_next = true;
        } else {
            cap_next = matches!(b, b'_' | b' ' | b'-' | b'.');
        }
    }
    out
}

/// `to_camel(token) + "Cmd"`.
pub fn method_name(token: &str) -> String {
    let mut name = to_camel(token);
    name.push_str(METHOD_SUFFIX);
    name
}

/// Best-effort reverse of [`method_name`] for display: `ClearCacheCmd` ->
/// `clear-cache`.
pub fn display_token(method: &str) -> String {
    let base = method.strip_suffix(METHOD_SUFFIX).unwrap_or(method);
    let mut out = String::with_capacity(base.len() + 4);
    for (i, c) in base.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
