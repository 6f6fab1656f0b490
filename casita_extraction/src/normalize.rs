//! Numeric token normalization.

/// Convert a raw captured numeric token into a non-negative integer.
///
/// Thousands-separating commas are stripped and a trailing `k` (either
/// case) multiplies the value by 1000, so `"23,000"` and `"23k"` both
/// normalize to `23000`. Anything left over that is not a plain digit
/// string fails the normalization — in particular decimal tokens like
/// `"2.5k"` are rejected rather than silently mangled, and values that
/// overflow `i64` are treated the same as unparseable ones.
///
/// `None` means the token should be treated as if the pattern had not
/// matched at all; absence drives the clarification flow and is not an
/// error.
#[must_use]
pub fn normalize_number(raw: &str) -> Option<i64> {
    let cleaned = raw.trim().replace(',', "").to_lowercase();

    let (digits, multiplier) = cleaned
        .strip_suffix('k')
        .map_or((cleaned.as_str(), 1), |prefix| (prefix, 1000));

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<i64>().ok()?.checked_mul(multiplier)
}
