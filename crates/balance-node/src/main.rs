//! balancemgr binary
//!
//! Thin entry point: loads configuration, opens the ledger database and
//! hands one invocation to the dispatcher.
//!
//! ```bash
//! balancemgr invoke create alice
//! balancemgr invoke charge alice 50
//! balancemgr invoke charge alice -20
//! balancemgr invoke query alice        # prints 30
//! balancemgr --json config
//! ```

mod cli;
mod config;
mod error;
mod output;

use anyhow::Result;
use balance_core::{Dispatcher, Invocation, Response};
use balance_storage::LedgerDb;
use cli::{Cli, Command};
use config::NodeConfig;
use error::NodeError;
use output::{response_output, Output};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load configuration, then apply overrides
    let mut config = NodeConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    // Initialize tracing (stderr, so stdout carries only the result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match &cli.command {
        Command::Config => {
            Output::new(cli.json)
                .field("datadir", &config.datadir.to_string_lossy())
                .field("log_level", &config.log_level)
                .field_value("contract", serde_json::to_value(&config.contract)?)
                .field_value("database", serde_json::to_value(&config.database)?)
                .message(config.to_toml()?.trim_end())
                .print();
        }
        Command::Invoke { function, args } => {
            let invocation = Invocation::new(function.as_str(), args.iter().cloned());
            let response = run_invocation(&config, &invocation)?;
            let ok = response.is_ok();
            response_output(&response, cli.json).print();
            if !ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Open the ledger, dispatch one invocation, close the ledger
fn run_invocation(config: &NodeConfig, invocation: &Invocation) -> Result<Response, NodeError> {
    let mut ledger = LedgerDb::open(&config.datadir, &config.database.to_db_config())?;
    tracing::info!(datadir = %config.datadir.display(), function = %invocation.function, "invoking");

    let dispatcher = Dispatcher::new(config.contract.clone());
    let response = dispatcher.invoke(&mut ledger, invocation);

    ledger.close();
    Ok(response)
}
