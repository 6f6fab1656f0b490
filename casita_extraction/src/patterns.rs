//! Per-slot recognition pattern tables.
//!
//! Each slot has an ordered list of patterns; order is the priority order,
//! so when a sentence could match several phrasings for the same slot the
//! first listed pattern is authoritative. Patterns are applied to the
//! lowercased utterance with search semantics and capture the numeric token
//! in group 1. All patterns are compiled once at first use.

use once_cell::sync::Lazy;
use regex::Regex;

use casita_core::Slot;

#[expect(clippy::unwrap_used, reason = "pattern literals are known-valid")]
static ROOMS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)[\s-]*(?:rooms?|bedrooms?|beds?|br)\b").unwrap(),
        Regex::new(r"(?:rooms?|bedrooms?|beds?)\s*(?:is|are|of)?\s*(\d+)").unwrap(),
    ]
});

#[expect(clippy::unwrap_used, reason = "pattern literals are known-valid")]
static SIZE: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+[,\d]*)\s*(?:sq\s*ft|square\s*feet|square\s*foot|sqft)").unwrap(),
        Regex::new(r"(?:size|area)\s*(?:is|of)?\s*(\d+[,\d]*)").unwrap(),
    ]
});

#[expect(clippy::unwrap_used, reason = "pattern literals are known-valid")]
static INCOME: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\$?\s*(\d+[,\d]*k?)\s*(?:income|salary|earning)").unwrap(),
        Regex::new(r"(?:income|salary|earning)\s*(?:is|of)?\s*\$?\s*(\d+[,\d]*k?)").unwrap(),
    ]
});

#[expect(clippy::unwrap_used, reason = "pattern literals are known-valid")]
static POPULATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+[,\d]*)\s*(?:population|people|residents)").unwrap(),
        Regex::new(r"(?:population|people|residents)\s*(?:is|of)?\s*(\d+[,\d]*)").unwrap(),
    ]
});

/// The ordered pattern list for a slot.
pub(crate) fn patterns_for(slot: Slot) -> &'static [Regex] {
    match slot {
        Slot::Rooms => ROOMS.as_slice(),
        Slot::Size => SIZE.as_slice(),
        Slot::Income => INCOME.as_slice(),
        Slot::Population => POPULATION.as_slice(),
    }
}
