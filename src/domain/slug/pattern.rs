use crate::domain::slug::value_objects::Separator;
use regex::Regex;
use std::sync::LazyLock;

// Lowercase word runs joined by the separator or forward slashes, with an
// optional single leading and trailing slash for path-style slugs. The
// separator in the pattern follows the configured separator.
static HYPHEN_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/?[a-z0-9]+(?:[-/][a-z0-9]+)*/?$").unwrap());
static UNDERSCORE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/?[a-z0-9]+(?:[_/][a-z0-9]+)*/?$").unwrap());

/// Whether `value` is a well-formed slug under the given separator.
pub fn matches(value: &str, separator: Separator) -> bool {
    let pattern: &Regex = match separator {
        Separator::Hyphen => &HYPHEN_SLUG,
        Separator::Underscore => &UNDERSCORE_SLUG,
    };
    pattern.is_match(value)
}
