//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input struct,
//! so dispatch is monomorphized at compile time and adding a command only
//! means implementing the trait.

use std::sync::Arc;

use tracing::warn;

use casita_config::Config;
use casita_conversation::{DialogueManager, DialogueSettings};
use casita_core::Predictor;
use casita_predictor::LinearModel;

mod chat;
mod init;
mod predict;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use predict::{PredictInput, PredictStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type,
/// enabling type-safe parameter passing without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Assemble a dialogue manager from the configuration.
///
/// A missing or unreadable model file is downgraded to a warning: the
/// dialogue still runs and apologizes when a prediction is requested.
fn build_manager(config: &Config) -> DialogueManager {
    let predictor: Option<Arc<dyn Predictor>> = match LinearModel::load(&config.model.path) {
        Ok(model) => Some(Arc::new(model)),
        Err(error) => {
            warn!(
                %error,
                path = %config.model.path.display(),
                "running without a prediction model"
            );
            None
        }
    };

    DialogueManager::new(
        predictor,
        DialogueSettings {
            carry_slots: config.dialogue.carry_slots,
        },
    )
}
