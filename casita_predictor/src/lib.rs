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

//! The price predictor consumed by the dialogue layer.
//!
//! Parameters are fitted offline and shipped as a small JSON file; this
//! crate only loads them and evaluates the model. A missing or malformed
//! parameter file is not fatal — the assistant runs without a predictor
//! and apologizes when a prediction is requested.

mod linear;

pub use linear::{LinearModel, ModelError, ModelFile, default_model, write_default_model};
