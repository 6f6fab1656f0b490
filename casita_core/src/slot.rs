//! The four required house attributes and the per-utterance value set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the four attributes a prediction needs.
///
/// Declaration order is significant: clarification prompts and missing-slot
/// lists always enumerate slots in this order, regardless of the order they
/// were mentioned in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Number of rooms or bedrooms.
    Rooms,
    /// House size in square feet.
    Size,
    /// Median income of the surrounding area, in dollars.
    Income,
    /// Population of the surrounding area.
    Population,
}

impl Slot {
    /// All required slots, in declaration order.
    pub const ALL: [Self; 4] = [Self::Rooms, Self::Size, Self::Income, Self::Population];

    /// Returns the machine name of this slot, as used in `key=value` input.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Rooms => "rooms",
            Self::Size => "size",
            Self::Income => "income",
            Self::Population => "population",
        }
    }

    /// Returns the human-readable label used in clarification prompts.
    #[must_use]
    pub const fn label(&self) -> &str {
        match self {
            Self::Rooms => "number of rooms",
            Self::Size => "house size in square feet",
            Self::Income => "median income",
            Self::Population => "area population",
        }
    }
}

impl FromStr for Slot {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rooms" => Ok(Self::Rooms),
            "size" => Ok(Self::Size),
            "income" => Ok(Self::Income),
            "population" => Ok(Self::Population),
            _ => Err("unknown slot name"),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values collected for the required slots, at most one per slot.
///
/// A set is built fresh for each utterance, merged against whatever the
/// caller already knew, and handed to the completion tracker. Iteration is
/// always in slot declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotSet {
    values: BTreeMap<Slot, i64>,
}

impl SlotSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Record a value for a slot, replacing any previous value.
    pub fn insert(&mut self, slot: Slot, value: i64) {
        self.values.insert(slot, value);
    }

    /// Look up the value recorded for a slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<i64> {
        self.values.get(&slot).copied()
    }

    /// Whether a value is recorded for the slot.
    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.values.contains_key(&slot)
    }

    /// Number of slots with a recorded value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no slot has a value yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over recorded values in slot declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, i64)> + '_ {
        self.values.iter().map(|(slot, value)| (*slot, *value))
    }

    /// Combine with a newer set; values in `newer` win on conflict.
    #[must_use]
    pub fn merged(&self, newer: &Self) -> Self {
        let mut combined = self.clone();
        for (slot, value) in newer.iter() {
            combined.insert(slot, value);
        }
        combined
    }

    /// Required slots that still have no value, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.contains(*slot))
            .collect()
    }
}

impl FromIterator<(Slot, i64)> for SlotSet {
    fn from_iter<I: IntoIterator<Item = (Slot, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(slot.as_str().parse::<Slot>(), Ok(slot));
        }
        assert!("price".parse::<Slot>().is_err());
    }

    #[test]
    fn test_slot_name_is_case_insensitive() {
        assert_eq!("POPULATION".parse::<Slot>(), Ok(Slot::Population));
    }

    #[test]
    fn test_insert_replaces_previous_value() {
        let mut set = SlotSet::new();
        set.insert(Slot::Rooms, 3);
        set.insert(Slot::Rooms, 4);
        assert_eq!(set.get(Slot::Rooms), Some(4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_missing_follows_declaration_order() {
        let mut set = SlotSet::new();
        set.insert(Slot::Population, 23_000);
        set.insert(Slot::Rooms, 3);
        assert_eq!(set.missing(), vec![Slot::Size, Slot::Income]);
    }

    #[test]
    fn test_merged_prefers_newer_values() {
        let older: SlotSet = [(Slot::Rooms, 3), (Slot::Size, 1500)].into_iter().collect();
        let newer: SlotSet = [(Slot::Rooms, 4), (Slot::Income, 50_000)]
            .into_iter()
            .collect();

        let combined = older.merged(&newer);
        assert_eq!(combined.get(Slot::Rooms), Some(4));
        assert_eq!(combined.get(Slot::Size), Some(1500));
        assert_eq!(combined.get(Slot::Income), Some(50_000));
        assert_eq!(combined.missing(), vec![Slot::Population]);
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let set: SlotSet = [
            (Slot::Population, 1),
            (Slot::Rooms, 2),
            (Slot::Income, 3),
            (Slot::Size, 4),
        ]
        .into_iter()
        .collect();

        let order: Vec<Slot> = set.iter().map(|(slot, _)| slot).collect();
        assert_eq!(order, Slot::ALL.to_vec());
    }
}
