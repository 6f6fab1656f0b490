//! Greeting detection.
//!
//! Only greeting-only input short-circuits extraction: a message whose
//! every word is a salutation, or that is exactly one of the time-of-day
//! phrases. A greeting folded into a real question ("hi, what would a
//! 3-bedroom cost?") still goes through extraction.

const GREETING_WORDS: [&str; 3] = ["hi", "hello", "hey"];
const GREETING_PHRASES: [&str; 3] = ["good morning", "good afternoon", "good evening"];

/// Whether the message is a greeting and nothing else.
#[must_use]
pub fn is_greeting(message: &str) -> bool {
    let lower = message.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return false;
    }

    if tokens.iter().all(|token| GREETING_WORDS.contains(token)) {
        return true;
    }

    GREETING_PHRASES.contains(&tokens.join(" ").as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_greetings() {
        assert!(is_greeting("hello"));
        assert!(is_greeting("Hi!"));
        assert!(is_greeting("hey"));
        assert!(is_greeting("Good morning"));
        assert!(is_greeting("good evening!"));
    }

    #[test]
    fn test_greeting_with_content_is_not_greeting_only() {
        assert!(!is_greeting("hi, what would a 3-bedroom cost?"));
        assert!(!is_greeting("hello there"));
        assert!(!is_greeting("good day"));
    }

    #[test]
    fn test_words_containing_greetings_do_not_count() {
        // "this" contains "hi" but is not a salutation.
        assert!(!is_greeting("what is this"));
        assert!(!is_greeting("the highway is nearby"));
    }

    #[test]
    fn test_empty_input_is_not_a_greeting() {
        assert!(!is_greeting(""));
        assert!(!is_greeting("   "));
        assert!(!is_greeting("?!"));
    }
}
