//! Command-line arguments

use clap::{Args, Parser, Subcommand};

use crate::demo::DemoOptions;

/// Red team scenario generator and attack simulator
#[derive(Parser, Debug)]
#[command(
    name = "redteam-simulator",
    version,
    about = "Generate, simulate and analyze red team attacks against maritime and infrastructure targets",
    long_about = "Generates attack scenarios with a language model, simulates them step by step \
                  and analyzes the outcome.\n\n\
                  Runs the demonstration when no subcommand is given. Configuration is read from \
                  config/default.toml, config/local.toml and REDTEAM__* environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve,
    /// Collect targets, run two simulations and write the results
    Demo(DemoArgs),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct DemoArgs {
    /// Vessels to collect
    #[arg(long, default_value_t = 5)]
    pub vessels: usize,

    /// Facilities to collect
    #[arg(long, default_value_t = 5)]
    pub facilities: usize,
}

impl Default for DemoArgs {
    fn default() -> Self {
        let options = DemoOptions::default();
        Self {
            vessels: options.vessels,
            facilities: options.facilities,
        }
    }
}

impl From<DemoArgs> for DemoOptions {
    fn from(args: DemoArgs) -> Self {
        Self {
            vessels: args.vessels,
            facilities: args.facilities,
        }
    }
}

impl Cli {
    /// The subcommand to run, `demo` when none was given
    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::Serve) => Commands::Serve,
            Some(Commands::Demo(args)) => Commands::Demo(*args),
            None => Commands::Demo(DemoArgs::default()),
        }
    }
}
