//! Dialogue manager: session bookkeeping and prediction around the engine.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info, warn};

use casita_core::{HouseInput, Predictor, Role, SlotSet};
use casita_extraction::SlotExtractor;

use crate::engine::{TurnOutcome, evaluate_turn};
use crate::reply;
use crate::session::ConversationSession;

/// Dialogue behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct DialogueSettings {
    /// Carry slots collected in earlier turns forward until all four are
    /// known. Disabled, every turn stands alone.
    pub carry_slots: bool,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self { carry_slots: true }
    }
}

/// What the assistant said in response to one utterance.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Rendered reply text.
    pub text: String,
    /// The outcome the text was rendered from.
    pub outcome: TurnOutcome,
    /// The price estimate, when one was produced this turn.
    pub estimate: Option<f64>,
    /// Turn number within the session.
    pub turn_number: usize,
}

/// Drives a conversation: extraction, slot accumulation, prediction.
///
/// The manager owns the [`ConversationSession`]; the per-turn logic itself
/// is the pure [`evaluate_turn`]. Processing a turn is infallible — every
/// failure mode has a reply template.
pub struct DialogueManager {
    extractor: SlotExtractor,
    predictor: Option<Arc<dyn Predictor>>,
    settings: DialogueSettings,
    session: ConversationSession,
}

impl DialogueManager {
    /// Create a manager, optionally with a loaded predictor.
    ///
    /// Without a predictor the dialogue still runs; complete parameter sets
    /// are answered with the model-unavailable apology.
    #[must_use]
    pub fn new(predictor: Option<Arc<dyn Predictor>>, settings: DialogueSettings) -> Self {
        info!(
            carry_slots = settings.carry_slots,
            predictor = predictor.is_some(),
            "starting dialogue"
        );
        Self {
            extractor: SlotExtractor::new(),
            predictor,
            settings,
            session: ConversationSession::new(),
        }
    }

    /// Name the underlying session.
    #[must_use]
    pub fn with_session_name(mut self, name: String) -> Self {
        self.session = self.session.with_name(name);
        self
    }

    /// Process one user utterance and produce the assistant's reply.
    pub fn process_turn(&mut self, message: &str) -> Reply {
        self.session.add_message(Role::User, message.to_string());
        let turn_number = self.session.turn_count();
        debug!(turn_number, "processing turn");

        let known = if self.settings.carry_slots {
            self.session.known_slots.clone()
        } else {
            SlotSet::new()
        };

        let (collected, outcome) = evaluate_turn(&self.extractor, &known, message);
        let (text, estimate) = self.render(&outcome);

        if self.settings.carry_slots {
            // A completed prediction ends the house under discussion; the
            // next turn starts fresh.
            self.session.known_slots = if estimate.is_some() {
                SlotSet::new()
            } else {
                collected
            };
        }

        self.session.add_message(Role::Assistant, text.clone());

        Reply {
            text,
            outcome,
            estimate,
            turn_number,
        }
    }

    /// Run an interactive conversation loop over stdin/stdout.
    ///
    /// # Errors
    /// Returns an error only for terminal I/O failures; turn processing
    /// itself never fails.
    pub fn run_interactive(&mut self) -> std::io::Result<()> {
        println!("=== Conversation Session: {} ===\n", self.session.id);
        println!("{}\n", reply::help_text());
        println!("Type 'exit', 'quit', or Ctrl+C to end the session.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                println!("\n{}", reply::goodbye_text());
                break;
            }

            if input.is_empty() {
                continue;
            }

            let turn = self.process_turn(input);
            println!("\n{}\n", turn.text);
        }

        info!(turns = self.session.turn_count(), "session ended");
        Ok(())
    }

    /// The current session state.
    #[must_use]
    pub const fn session(&self) -> &ConversationSession {
        &self.session
    }

    fn render(&self, outcome: &TurnOutcome) -> (String, Option<f64>) {
        match outcome {
            TurnOutcome::Greeting => (reply::greeting_text().to_string(), None),
            TurnOutcome::Help => (reply::help_text().to_string(), None),
            TurnOutcome::NoParameters => (reply::no_parameters_text().to_string(), None),
            TurnOutcome::NeedsClarification(missing) => (reply::clarification_text(missing), None),
            TurnOutcome::InvalidInput(error) => (reply::invalid_text(error), None),
            TurnOutcome::Ready(input) => self.predict(input),
        }
    }

    fn predict(&self, input: &HouseInput) -> (String, Option<f64>) {
        let Some(predictor) = self.predictor.as_deref() else {
            warn!("prediction requested but no model is loaded");
            return (reply::unavailable_text().to_string(), None);
        };

        match predictor.predict(input) {
            Ok(price) => {
                info!(price, "estimate produced");
                (reply::estimate_text(input, price), Some(price))
            }
            Err(error) => {
                warn!(%error, "prediction failed");
                (reply::unavailable_text().to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casita_core::PredictError;

    struct BrokenPredictor;

    impl Predictor for BrokenPredictor {
        fn predict(&self, _input: &HouseInput) -> Result<f64, PredictError> {
            Err(PredictError::Unavailable("model file missing".to_string()))
        }
    }

    #[test]
    fn test_settings_default_carries_slots() {
        assert!(DialogueSettings::default().carry_slots);
    }

    #[test]
    fn test_manager_without_predictor_apologizes() {
        let mut manager = DialogueManager::new(None, DialogueSettings::default());
        let turn = manager.process_turn("rooms=3, size=1500, income=50000, population=23000");

        assert!(matches!(turn.outcome, TurnOutcome::Ready(_)));
        assert!(turn.estimate.is_none());
        assert_eq!(turn.text, reply::unavailable_text());
    }

    #[test]
    fn test_failing_predictor_is_an_apology_not_an_error() {
        let mut manager =
            DialogueManager::new(Some(Arc::new(BrokenPredictor)), DialogueSettings::default());
        let turn = manager.process_turn("rooms=3, size=1500, income=50000, population=23000");

        assert!(matches!(turn.outcome, TurnOutcome::Ready(_)));
        assert!(turn.estimate.is_none());
        assert_eq!(turn.text, reply::unavailable_text());
    }

    #[test]
    fn test_transcript_records_both_sides() {
        let mut manager = DialogueManager::new(None, DialogueSettings::default());
        manager.process_turn("hello");

        let session = manager.session();
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.messages[0].role, Role::User);
        assert_eq!(session.messages[1].role, Role::Assistant);
    }
}
