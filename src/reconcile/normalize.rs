/// Canonicalize text for "is this still the template" comparisons.
///
/// `\r\n` and bare `\r` become `\n`, then surrounding whitespace is trimmed.
/// Blank input normalizes to the empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim()
        .to_string()
}

/// Whether two texts are the same once normalized.
#[must_use]
pub fn same_text(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
