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

//! Shared vocabulary for the casita house-price assistant.
//!
//! This crate defines the types every other crate speaks in: the four
//! required [`Slot`]s, the per-utterance [`SlotSet`], the validated
//! [`HouseInput`] record, and the [`Predictor`] capability consumed by the
//! dialogue layer.

use serde::{Deserialize, Serialize};

pub mod house;
pub mod predict;
pub mod slot;

pub use house::{HouseInput, ValidationError};
pub use predict::{PredictError, Predictor};
pub use slot::{Slot, SlotSet};

/// Who authored a transcript message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}
