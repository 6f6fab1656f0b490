//! The extraction facade used by the dialogue layer.

use tracing::debug;

use casita_core::{Slot, SlotSet};

use crate::normalize::normalize_number;
use crate::patterns::patterns_for;
use crate::structured;

/// Extracts slot values from a single utterance.
///
/// Stateless; the pattern tables are compiled once per process, so this is
/// cheap to construct and clone. Extraction is deterministic: the same text
/// always yields the same [`SlotSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotExtractor;

impl SlotExtractor {
    /// Create a new slot extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract every slot value present in a message.
    ///
    /// The structured `key=value` shorthand is checked first; when any
    /// well-formed pair is present it fully determines the result and the
    /// natural-language patterns are not consulted.
    #[must_use]
    pub fn extract(&self, message: &str) -> SlotSet {
        if let Some(slots) = self.extract_structured(message) {
            debug!(count = slots.len(), "structured input took precedence");
            return slots;
        }
        self.extract_natural(message)
    }

    /// Extract from the structured shorthand only.
    ///
    /// `None` means no well-formed pair was found and the caller should try
    /// the natural-language patterns instead.
    #[must_use]
    pub fn extract_structured(&self, message: &str) -> Option<SlotSet> {
        structured::scan(message)
    }

    /// Extract via the natural-language pattern tables only.
    #[must_use]
    pub fn extract_natural(&self, message: &str) -> SlotSet {
        let lower = message.to_lowercase();

        let mut slots = SlotSet::new();
        for slot in Slot::ALL {
            if let Some(value) = match_in_lowered(&lower, slot) {
                slots.insert(slot, value);
            }
        }
        slots
    }

    /// Try one slot's patterns against a message.
    #[must_use]
    pub fn match_slot(&self, message: &str, slot: Slot) -> Option<i64> {
        match_in_lowered(&message.to_lowercase(), slot)
    }
}

fn match_in_lowered(lower: &str, slot: Slot) -> Option<i64> {
    for pattern in patterns_for(slot) {
        let Some(caps) = pattern.captures(lower) else {
            continue;
        };
        let raw = caps.get(1)?.as_str();
        // A token the normalizer rejects counts as a non-match, so a later
        // pattern still gets its chance.
        if let Some(value) = normalize_number(raw) {
            debug!(slot = %slot, value, "matched slot");
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_phrasings() {
        let extractor = SlotExtractor::new();
        assert_eq!(extractor.match_slot("a 3 bedroom house", Slot::Rooms), Some(3));
        assert_eq!(extractor.match_slot("4-bed home", Slot::Rooms), Some(4));
        assert_eq!(extractor.match_slot("2 br apartment", Slot::Rooms), Some(2));
        assert_eq!(extractor.match_slot("rooms are 5", Slot::Rooms), Some(5));
        assert_eq!(extractor.match_slot("number of bedrooms is 3", Slot::Rooms), Some(3));
    }

    #[test]
    fn test_size_phrasings() {
        let extractor = SlotExtractor::new();
        assert_eq!(extractor.match_slot("1500 sqft", Slot::Size), Some(1500));
        assert_eq!(extractor.match_slot("2,000 square feet", Slot::Size), Some(2000));
        assert_eq!(extractor.match_slot("1500 sq ft", Slot::Size), Some(1500));
        assert_eq!(extractor.match_slot("size is 1800", Slot::Size), Some(1800));
        assert_eq!(extractor.match_slot("an area of 900", Slot::Size), Some(900));
    }

    #[test]
    fn test_income_phrasings() {
        let extractor = SlotExtractor::new();
        assert_eq!(extractor.match_slot("$50,000 income", Slot::Income), Some(50_000));
        assert_eq!(extractor.match_slot("$50k income", Slot::Income), Some(50_000));
        assert_eq!(extractor.match_slot("income is $50k", Slot::Income), Some(50_000));
        assert_eq!(extractor.match_slot("salary of 45000", Slot::Income), Some(45_000));
        assert_eq!(extractor.match_slot("earning is $38,500", Slot::Income), Some(38_500));
    }

    #[test]
    fn test_population_phrasings() {
        let extractor = SlotExtractor::new();
        assert_eq!(
            extractor.match_slot("23,000 people", Slot::Population),
            Some(23_000)
        );
        assert_eq!(
            extractor.match_slot("population is 25,000", Slot::Population),
            Some(25_000)
        );
        assert_eq!(
            extractor.match_slot("12000 residents", Slot::Population),
            Some(12_000)
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let extractor = SlotExtractor::new();
        assert_eq!(extractor.match_slot("how much is a house", Slot::Rooms), None);
        assert_eq!(extractor.match_slot("", Slot::Size), None);
    }

    #[test]
    fn test_first_pattern_has_priority() {
        let extractor = SlotExtractor::new();
        // Both the "<N> sqft" and the "size is <N>" phrasings are present;
        // the first listed pattern decides.
        assert_eq!(
            extractor.match_slot("size is 900 but listed as 1500 sqft", Slot::Size),
            Some(1500)
        );
    }

    #[test]
    fn test_full_sentence_extraction() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract(
            "3 bedroom house with 1500 sqft in an area with $50,000 income and 23,000 people",
        );

        assert_eq!(slots.get(Slot::Rooms), Some(3));
        assert_eq!(slots.get(Slot::Size), Some(1500));
        assert_eq!(slots.get(Slot::Income), Some(50_000));
        assert_eq!(slots.get(Slot::Population), Some(23_000));
    }

    #[test]
    fn test_structured_input_suppresses_natural_language() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("rooms=3 for a house with 1500 sqft and 23,000 people");

        assert_eq!(slots.get(Slot::Rooms), Some(3));
        assert!(!slots.contains(Slot::Size));
        assert!(!slots.contains(Slot::Population));
    }

    #[test]
    fn test_decimal_pair_falls_through_to_patterns() {
        let extractor = SlotExtractor::new();
        // The malformed pair is not structured input, so the sentence is
        // still read by the natural-language patterns.
        let slots = extractor.extract("income=50.5 for a 3 bedroom house");
        assert_eq!(slots.get(Slot::Rooms), Some(3));
        assert!(!slots.contains(Slot::Income));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = SlotExtractor::new();
        let text = "4 bed, 2,000 sqft home, $60k salary, 18,000 residents";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_mixed_case_input() {
        let extractor = SlotExtractor::new();
        let slots = extractor.extract("A 3 Bedroom House With 1500 SQFT");
        assert_eq!(slots.get(Slot::Rooms), Some(3));
        assert_eq!(slots.get(Slot::Size), Some(1500));
    }
}
