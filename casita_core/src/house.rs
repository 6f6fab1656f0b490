//! The validated parameter record handed to the predictor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slot::{Slot, SlotSet};

/// Why a slot set could not be turned into a [`HouseInput`].
///
/// Messages are written for the user: the dialogue layer surfaces them
/// verbatim inside its "values don't look quite right" reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no value given for {}", slot_names(.0))]
    MissingSlots(Vec<Slot>),

    #[error("the {slot} value {value} is negative")]
    Negative { slot: Slot, value: i64 },

    #[error("the {slot} value {value} is too large to be a real {slot}")]
    OutOfRange { slot: Slot, value: i64 },
}

fn slot_names(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(Slot::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A complete, validated set of house attributes.
///
/// Construction via [`HouseInput::from_slots`] is the only way to obtain
/// one, so holding a `HouseInput` guarantees all four slots are present and
/// within range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HouseInput {
    pub rooms: u32,
    pub size: u32,
    pub income: u32,
    pub population: u32,
}

impl HouseInput {
    /// Validate a slot set claiming to be complete.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the offending slot(s) when a
    /// value is absent, negative, or out of range.
    pub fn from_slots(slots: &SlotSet) -> Result<Self, ValidationError> {
        let missing = slots.missing();
        if !missing.is_empty() {
            return Err(ValidationError::MissingSlots(missing));
        }

        Ok(Self {
            rooms: checked(slots, Slot::Rooms)?,
            size: checked(slots, Slot::Size)?,
            income: checked(slots, Slot::Income)?,
            population: checked(slots, Slot::Population)?,
        })
    }

    /// The feature vector in the order the model was fitted with.
    #[must_use]
    pub fn features(&self) -> [f64; 4] {
        [
            f64::from(self.rooms),
            f64::from(self.size),
            f64::from(self.income),
            f64::from(self.population),
        ]
    }
}

fn checked(slots: &SlotSet, slot: Slot) -> Result<u32, ValidationError> {
    let value = slots
        .get(slot)
        .ok_or_else(|| ValidationError::MissingSlots(vec![slot]))?;

    if value < 0 {
        return Err(ValidationError::Negative { slot, value });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { slot, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> SlotSet {
        [
            (Slot::Rooms, 3),
            (Slot::Size, 1500),
            (Slot::Income, 50_000),
            (Slot::Population, 23_000),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_complete_set_validates() {
        let input = HouseInput::from_slots(&full_set());
        assert_eq!(
            input,
            Ok(HouseInput {
                rooms: 3,
                size: 1500,
                income: 50_000,
                population: 23_000,
            })
        );
    }

    #[test]
    fn test_missing_slots_are_named_in_order() {
        let set: SlotSet = [(Slot::Rooms, 3), (Slot::Population, 23_000)]
            .into_iter()
            .collect();
        let err = HouseInput::from_slots(&set);
        assert_eq!(
            err,
            Err(ValidationError::MissingSlots(vec![Slot::Size, Slot::Income]))
        );
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let mut set = full_set();
        set.insert(Slot::Income, -5);
        let err = HouseInput::from_slots(&set);
        assert_eq!(
            err,
            Err(ValidationError::Negative {
                slot: Slot::Income,
                value: -5,
            })
        );
    }

    #[test]
    fn test_oversized_value_is_rejected() {
        let mut set = full_set();
        set.insert(Slot::Population, i64::from(u32::MAX) + 1);
        assert!(matches!(
            HouseInput::from_slots(&set),
            Err(ValidationError::OutOfRange {
                slot: Slot::Population,
                ..
            })
        ));
    }

    #[test]
    fn test_error_message_names_the_slot() {
        let err = ValidationError::MissingSlots(vec![Slot::Size, Slot::Income]);
        assert_eq!(err.to_string(), "no value given for size, income");
    }

    #[test]
    fn test_features_order() {
        let input = HouseInput {
            rooms: 3,
            size: 1500,
            income: 50_000,
            population: 23_000,
        };
        assert_eq!(input.features(), [3.0, 1500.0, 50_000.0, 23_000.0]);
    }
}
