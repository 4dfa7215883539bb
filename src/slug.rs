use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("static slug pattern is valid")
});

/// Turns display text into a lowercase, hyphen-separated identifier.
///
/// Distinct inputs may collide ("Gut–Brain" and "gut brain" both map to
/// `gut-brain`). All-symbol input yields an empty string.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = NON_SLUG_RUN.replace_all(&lowered, "-");
    let trimmed = replaced.strip_prefix('-').unwrap_or(&replaced);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}
