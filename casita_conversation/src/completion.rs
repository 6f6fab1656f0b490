//! The completion tracker: from a slot set to a terminal outcome.

use casita_core::{HouseInput, Slot, SlotSet, ValidationError};

/// Terminal value of one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueOutcome {
    /// Slots still unknown, in declaration order.
    NeedsClarification(Vec<Slot>),
    /// All four slots present and validated.
    Ready(HouseInput),
}

/// Decide whether a slot set is ready for prediction.
///
/// Missing slots are reported in declaration order regardless of the order
/// they were mentioned in. A complete set is validated before it may reach
/// the predictor.
///
/// # Errors
/// Returns the [`ValidationError`] when the set is complete but a value
/// fails the domain checks; the caller renders it as a clarification-shaped
/// reply instead of predicting.
pub fn complete(slots: &SlotSet) -> Result<DialogueOutcome, ValidationError> {
    let missing = slots.missing();
    if !missing.is_empty() {
        return Ok(DialogueOutcome::NeedsClarification(missing));
    }

    Ok(DialogueOutcome::Ready(HouseInput::from_slots(slots)?))
}
