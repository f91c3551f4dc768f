//! Identifier normalization.
//!
//! Project slugs, backend service names, and layer folder names all pass
//! through [`slugify`]. The output alphabet is restricted to `[a-z0-9-]`
//! with no leading or trailing hyphen, so every identifier is safe to use
//! as a directory name and as a URL path segment.

/// Normalize an arbitrary string into a kebab-case identifier.
///
/// Rules, in order: trim surrounding whitespace, lowercase, replace every
/// maximal run of characters outside `[a-z0-9]` with a single hyphen,
/// strip leading/trailing hyphens.
///
/// The function is total and idempotent: `slugify(slugify(s)) == slugify(s)`
/// for any input. Empty or all-symbol input produces an empty string —
/// callers must treat that as a validation failure.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            // Any separator run collapses to at most one hyphen, and only
            // if alphanumeric output follows (no trailing hyphen).
            pending_hyphen = true;
        }
    }

    out
}

/// Uppercase only the first character of `s`, leaving the rest untouched.
///
/// Deliberately literal: "my-api" becomes "My-api", not "My API". Seed
/// headings and plan-entry display names rely on exactly this rule.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
