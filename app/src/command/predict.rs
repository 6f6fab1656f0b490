//! Direct prediction command, bypassing the dialogue.

use casita_config::Config;
use casita_conversation::reply;
use casita_core::{HouseInput, Predictor};
use casita_predictor::LinearModel;

/// Input parameters for the Predict command strategy.
///
/// All four values are required on the command line, so the record is
/// complete by construction.
#[derive(Debug, Clone, Copy)]
pub struct PredictInput {
    pub rooms: u32,
    pub size: u32,
    pub income: u32,
    pub population: u32,
}

/// Strategy for executing the Predict command.
#[derive(Debug, Clone, Copy)]
pub struct PredictStrategy;

impl super::CommandStrategy for PredictStrategy {
    type Input = PredictInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let model = LinearModel::load(&config.model.path)?;

        let house = HouseInput {
            rooms: input.rooms,
            size: input.size,
            income: input.income,
            population: input.population,
        };

        let price = model.predict(&house)?;
        println!("{}", reply::estimate_text(&house, price));

        Ok(())
    }
}
