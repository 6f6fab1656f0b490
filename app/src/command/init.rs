use casita_config::Config;
use casita_predictor::write_default_model;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/casita/config.json` and,
/// when none exists yet, a demo model parameter file next to it.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;
        println!("Created config file at: {}", config_path.display());

        let config = Config::load()?;
        if config.model.path.exists() {
            println!(
                "Model parameters already exist at: {}",
                config.model.path.display()
            );
        } else {
            write_default_model(&config.model.path)?;
            println!(
                "Wrote demo model parameters to: {}",
                config.model.path.display()
            );
        }

        println!();
        println!("Next steps:");
        println!("   1. Replace the demo model parameters with your fitted ones");
        println!("   2. Run 'casita chat' to start a conversation");

        Ok(())
    }
}
