#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Derive a URL slug from a human-readable name.
///
/// Lowercases ASCII alphanumerics; every run of other characters collapses
/// to a single hyphen; leading and trailing hyphens are stripped. The result
/// is stable and idempotent, so slugs themselves slugify to themselves.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}
