use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

// а-яА-Я is the exact range the alias contract allows; ё/Ё sit outside it
// and are removed like any other disallowed character.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Zа-яА-Я0-9-]+").expect("Failed to compile filter regex"));

pub const MAX_ALIAS_LENGTH: usize = 128;

/// Derive a URL alias from a title. The steps run in a fixed order: trim,
/// collapse whitespace runs to single hyphens, delete disallowed characters,
/// lowercase. Punctuation glued between words is deleted without leaving a
/// separator ("foo@bar" becomes "foobar"), while whitespace-separated words
/// keep their hyphen. User-typed hyphens survive untouched.
pub fn slugify(title: &str) -> String {
    let trimmed = title.trim();
    let hyphenated = WHITESPACE_RUN.replace_all(trimmed, "-");
    let filtered = DISALLOWED.replace_all(&hyphenated, "");
    filtered.to_lowercase()
}

/// Check an alias against the form contract: 1-128 characters drawn from
/// lowercase ASCII letters, lowercase Cyrillic, digits, and hyphens. A
/// convenience predicate for form feedback, not a server-side safeguard.
pub fn validate_alias(alias: &str) -> bool {
    if alias.is_empty() || alias.chars().count() > MAX_ALIAS_LENGTH {
        return false;
    }
    alias.chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || ('а'..='я').contains(&c)
    })
}
