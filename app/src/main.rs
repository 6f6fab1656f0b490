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

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InitStrategy, PredictInput, PredictStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "casita")]
#[command(about = "Conversational house price assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the assistant
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Name for this session
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Predict from explicit values, skipping the dialogue
    Predict {
        /// Number of rooms
        #[arg(long)]
        rooms: u32,

        /// House size in square feet
        #[arg(long)]
        size: u32,

        /// Median income of the area, in dollars
        #[arg(long)]
        income: u32,

        /// Population of the area
        #[arg(long)]
        population: u32,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { message, name } => ChatStrategy.execute(ChatInput {
            message,
            session_name: name,
        }),
        Commands::Predict {
            rooms,
            size,
            income,
            population,
        } => PredictStrategy.execute(PredictInput {
            rooms,
            size,
            income,
            population,
        }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
