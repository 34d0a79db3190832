//! CLI argument parsing for balancemgr

use crate::config::NodeConfig;
use balance_core::CorruptBalancePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Account balance ledger
#[derive(Parser, Debug, Clone)]
#[command(name = "balancemgr")]
#[command(about = "Account balance ledger")]
#[command(version)]
pub struct Cli {
    /// Data directory for ledger storage
    #[arg(long, global = true)]
    pub datadir: Option<PathBuf>,

    /// Config file path (defaults to ~/.balancemgr/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Reject charges against balances that are not integers
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Invoke a contract operation (create, charge, query, init, upgrade)
    Invoke {
        /// Operation name
        function: String,
        /// Positional arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut NodeConfig) {
        if let Some(datadir) = &self.datadir {
            config.datadir = datadir.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.strict {
            config.contract.corrupt_balance = CorruptBalancePolicy::Strict;
        }
    }
}
