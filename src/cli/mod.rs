//! CLI module for the availability relay

pub mod serve;

use clap::{Parser, Subcommand};

/// Availability Relay - pass-through to the tuboleto availability API
#[derive(Parser)]
#[command(name = "availability-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the relay HTTP server (default)
    Serve,
}
