//! The `key=value` shorthand.
//!
//! Structured pairs are authoritative: as soon as one well-formed pair
//! appears anywhere in the message, natural-language matching is skipped
//! for the whole turn, even if the pairs cover fewer than four slots.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use casita_core::{Slot, SlotSet};

// The numeric token is captured including any fractional part so that a
// pair like `income=50.5` can be recognized and discarded as malformed
// instead of being misread as `income=50`.
#[expect(clippy::unwrap_used, reason = "pattern literal is known-valid")]
static PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z_][a-z0-9_]*)\s*=\s*(\d+(?:\.\d+)?)").unwrap());

/// Scan a message for `key=value` pairs.
///
/// Returns `None` when the message contains no well-formed pair at all, in
/// which case the caller falls back to natural-language matching. Returns
/// `Some` — possibly empty — when at least one well-formed pair exists:
/// recognized keys populate the set (last occurrence wins), unrecognized
/// keys are ignored, and the turn is structured either way.
pub(crate) fn scan(message: &str) -> Option<SlotSet> {
    let lower = message.to_lowercase();

    let mut any_pair = false;
    let mut slots = SlotSet::new();

    for caps in PAIR.captures_iter(&lower) {
        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        if value.as_str().contains('.') {
            debug!(key = key.as_str(), "skipping pair with non-integer value");
            continue;
        }
        any_pair = true;

        let Ok(slot) = key.as_str().parse::<Slot>() else {
            debug!(key = key.as_str(), "ignoring unrecognized key");
            continue;
        };
        if let Ok(parsed) = value.as_str().parse::<i64>() {
            slots.insert(slot, parsed);
        }
    }

    any_pair.then_some(slots)
}
