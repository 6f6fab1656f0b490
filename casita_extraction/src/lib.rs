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

//! Turns free-form text about a house into slot values.
//!
//! Two recognition paths feed the dialogue layer:
//!
//! - a structured `key=value` shorthand that, when present, fully determines
//!   the extracted set for the turn, and
//! - per-slot ordered regex pattern tables applied with search semantics to
//!   the lowercased utterance, first matching pattern wins.
//!
//! Matched numeric tokens go through [`normalize_number`], which handles
//! thousands-separating commas and a trailing `k` multiplier.

mod extractor;
mod normalize;
mod patterns;
mod structured;

pub use extractor::SlotExtractor;
pub use normalize::normalize_number;
