use crate::domain::slug::value_objects::Separator;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derives a slug from free text. Pure and deterministic; empty input
/// yields empty output. Idempotent over values already in slug form for
/// the same settings.
///
/// The steps, in order: optional lowercasing, accent removal via NFD
/// decomposition, dropping everything but letters, digits, hyphens,
/// slashes and spaces, turning whitespace runs into the separator,
/// collapsing separator and slash runs, and trimming a stray separator
/// from the ends while keeping an intentional leading/trailing slash.
pub fn slugify(text: &str, separator: Separator, lowercase: bool) -> String {
    let sep = separator.as_char();
    let input = if lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    let stripped: String = input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '/' | ' '))
        .collect();

    let mut joined = String::with_capacity(stripped.len());
    let mut in_space_run = false;
    for ch in stripped.trim().chars() {
        if ch == ' ' {
            if !in_space_run {
                joined.push(sep);
            }
            in_space_run = true;
        } else {
            joined.push(ch);
            in_space_run = false;
        }
    }

    let collapsed = collapse_runs(&collapse_runs(&joined, sep), '/');

    let had_leading_slash = collapsed.starts_with('/');
    let had_trailing_slash = collapsed.ends_with('/');

    let trimmed = collapsed.strip_prefix(sep).unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix(sep).unwrap_or(trimmed);

    let mut slug = trimmed.to_string();
    if had_leading_slash && !slug.starts_with('/') {
        slug.insert(0, '/');
    }
    if had_trailing_slash && !slug.ends_with('/') {
        slug.push('/');
    }
    slug
}

fn collapse_runs(input: &str, mark: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_was_mark = false;
    for ch in input.chars() {
        if ch == mark {
            if !previous_was_mark {
                out.push(mark);
            }
            previous_was_mark = true;
        } else {
            out.push(ch);
            previous_was_mark = false;
        }
    }
    out
}
