//! String utilities for the domain layer.

/// Treat empty (or whitespace-only) strings as absent.
///
/// Configuration sources frequently carry `""` for unset keys; those must
/// fall through to the next source instead of shadowing it.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Mask a secret for display, keeping at most the first four characters.
///
/// UTF-8 safe: the visible prefix always ends on a character boundary.
pub fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if visible.chars().count() == secret.chars().count() {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// Whether a string has the shape of an AWS region code (`us-east-1`,
/// `us-gov-west-1`, `ap-northeast-3`).
pub fn looks_like_region(region: &str) -> bool {
    region.contains('-')
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
