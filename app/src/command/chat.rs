//! Conversation command.
//!
//! Runs the slot-filling dialogue either interactively or for a single
//! message, accumulating details across turns until a prediction can be
//! made.

use tracing::{info, warn};

use casita_config::Config;
use casita_conversation::reply;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Session name (for new sessions)
    pub session_name: Option<String>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;

        let mut manager = super::build_manager(&config);
        if let Some(name) = input.session_name {
            manager = manager.with_session_name(name);
        }

        if let Some(message) = input.message {
            let turn = manager.process_turn(&message);
            println!("{}", turn.text);
            info!("Turn {} completed.", turn.turn_number);
        } else if let Err(error) = manager.run_interactive() {
            // Only broken terminal I/O can reach here; turn processing
            // itself never fails. Surface it and end the session.
            warn!(%error, "conversation loop aborted");
            eprintln!("{}", reply::failure_text(&error.to_string()));
        } else {
            info!(
                "Conversation ended: {} turns",
                manager.session().turn_count()
            );
        }

        Ok(())
    }
}
