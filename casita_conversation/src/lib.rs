#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Turn-by-turn dialogue over the slot extractor.
//!
//! One utterance flows through the greeting guard, the extractor, a merge
//! against the slots already known for the session, and the completion
//! tracker; the result is either a clarification question or a validated
//! record handed to the predictor. Every path terminates within the turn —
//! failures become replies, never crashes.
//!
//! The per-turn engine ([`evaluate_turn`]) is a pure function over
//! caller-owned state; [`DialogueManager`] owns a [`ConversationSession`]
//! and carries the accumulated slots between turns.

mod completion;
mod engine;
mod greeting;
mod manager;
pub mod reply;
mod session;

pub use completion::{DialogueOutcome, complete};
pub use engine::{TurnOutcome, evaluate_turn};
pub use greeting::is_greeting;
pub use manager::{DialogueManager, DialogueSettings, Reply};
pub use session::ConversationSession;
