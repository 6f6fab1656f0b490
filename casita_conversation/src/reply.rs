//! Templated reply texts.
//!
//! Free-form generation is out of scope; every assistant reply is one of
//! these templates.

use casita_core::{HouseInput, Slot, ValidationError};

/// Fixed response to greeting-only input.
#[must_use]
pub const fn greeting_text() -> &'static str {
    "Hi! I'm your friendly assistant for California house price predictions. \
     How can I help you today?"
}

/// Usage help, shown for empty input and as the interactive banner.
#[must_use]
pub const fn help_text() -> &'static str {
    "I can help you predict house prices in California!\n\
     \n\
     Just tell me about the house and area naturally, like:\n\
     \"How much would a 3-bedroom house with 1500 square feet cost in an \
     area where the income is $50,000 and 23,456 people live?\"\n\
     \n\
     Or you can use the simple format:\n\
     rooms=3, size=1500, income=50000, population=23456\n\
     \n\
     I'll understand either way!"
}

/// Instructional reply when nothing could be extracted.
#[must_use]
pub const fn no_parameters_text() -> &'static str {
    "I understand you're asking about house prices. To help you, I need:\n\
     \n\
     1. Number of rooms\n\
     2. House size (in square feet)\n\
     3. Area's median income\n\
     4. Area's population\n\
     \n\
     For example, you can ask:\n\
     \"What's the price of a 3-bedroom house with 1500 sq ft in an area \
     with $50,000 income and 23,456 people?\""
}

/// Clarification question enumerating the missing details.
#[must_use]
pub fn clarification_text(missing: &[Slot]) -> String {
    let labels = missing
        .iter()
        .map(Slot::label)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I need a few more details to give you an accurate prediction. \
         Could you tell me the {labels}?"
    )
}

/// Reply for values that failed validation.
#[must_use]
pub fn invalid_text(error: &ValidationError) -> String {
    format!("Some of the values don't look quite right: {error}. Please check them and try again.")
}

/// Apology when the prediction model cannot be used.
#[must_use]
pub const fn unavailable_text() -> &'static str {
    "I apologize, but I'm having trouble accessing my prediction model. \
     Please try again later."
}

/// The prediction answer, echoing the validated inputs.
#[must_use]
pub fn estimate_text(input: &HouseInput, price: f64) -> String {
    format!(
        "Based on the details you provided:\n\
         - {} rooms\n\
         - {} square feet\n\
         - ${} median income\n\
         - {} population\n\
         \n\
         I estimate the house price to be ${}.\n\
         \n\
         Would you like to try another prediction?",
        input.rooms,
        format_thousands(u64::from(input.size)),
        format_thousands(u64::from(input.income)),
        format_thousands(u64::from(input.population)),
        format_dollars(price),
    )
}

/// Catch-all reply for unexpected faults; the loop never crashes.
#[must_use]
pub fn failure_text(detail: &str) -> String {
    format!("I encountered an error while processing your request: {detail}")
}

/// Farewell printed when the user ends the session.
#[must_use]
pub const fn goodbye_text() -> &'static str {
    "Goodbye! Have a great day!"
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "price is floored at zero and far below u64 range"
)]
fn format_dollars(price: f64) -> String {
    format_thousands(price.max(0.0).round() as u64)
}

fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
