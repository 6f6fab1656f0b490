//! The pure per-turn engine.
//!
//! `evaluate_turn` owns no state: the caller passes in whatever slots it
//! already knows and receives the updated set back together with the turn's
//! outcome. The manager layers session bookkeeping and prediction on top.

use tracing::debug;

use casita_core::{HouseInput, Slot, SlotSet, ValidationError};
use casita_extraction::SlotExtractor;

use crate::completion::{DialogueOutcome, complete};
use crate::greeting::is_greeting;

/// What one utterance led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Greeting-only input; extraction was skipped.
    Greeting,
    /// Empty input; the caller shows the usage help.
    Help,
    /// Nothing extracted this turn and nothing known from before.
    NoParameters,
    /// Slots still unknown, in declaration order.
    NeedsClarification(Vec<Slot>),
    /// The collected values failed validation.
    InvalidInput(ValidationError),
    /// All four slots known and validated; ready for the predictor.
    Ready(HouseInput),
}

/// Process one utterance against the slots already known.
///
/// Returns the slot set to carry into the next turn (newly extracted
/// values win over previously known ones) and the outcome to render.
#[must_use]
pub fn evaluate_turn(
    extractor: &SlotExtractor,
    known: &SlotSet,
    message: &str,
) -> (SlotSet, TurnOutcome) {
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return (known.clone(), TurnOutcome::Help);
    }

    if is_greeting(trimmed) {
        return (known.clone(), TurnOutcome::Greeting);
    }

    let extracted = extractor.extract(trimmed);
    debug!(
        extracted = extracted.len(),
        known = known.len(),
        "utterance processed"
    );

    let collected = known.merged(&extracted);
    if collected.is_empty() {
        return (collected, TurnOutcome::NoParameters);
    }

    let outcome = match complete(&collected) {
        Ok(DialogueOutcome::NeedsClarification(missing)) => {
            TurnOutcome::NeedsClarification(missing)
        }
        Ok(DialogueOutcome::Ready(input)) => TurnOutcome::Ready(input),
        Err(error) => TurnOutcome::InvalidInput(error),
    };

    (collected, outcome)
}
