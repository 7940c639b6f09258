//! Experiment-name normalization.

/// Fallback for names that normalize to nothing.
const EMPTY_SLUG_FALLBACK: &str = "run";

/// Normalize an experiment name into a filesystem-safe directory slug.
///
/// Runs of characters outside `[a-zA-Z0-9_-]` collapse into a single `-`,
/// leading and trailing `-` are trimmed, and the result is lowercased.
/// Names that normalize to nothing fall back to `"run"`.
///
/// Total over any input, deterministic, and idempotent: slugifying a slug
/// returns it unchanged.
///
/// # Example
///
/// ```rust
/// use splatsweep::experiment::slugify;
///
/// assert_eq!(slugify("Flowers (v2)"), "flowers-v2");
/// assert_eq!(slugify("bicycle"), "bicycle");
/// assert_eq!(slugify("  "), "run");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        EMPTY_SLUG_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}
