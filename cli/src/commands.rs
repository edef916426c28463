pub mod check;
pub mod form;
pub mod lookup;

use clap::{ArgAction, Parser, Subcommand};
use ipterm_common::config::DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(name = "ipterm", version)]
#[command(about = "Look up where an IP address lives.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the geolocation service
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Reduce output (-q hides headers, -qq also hides the spinner)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug logs, including why a lookup failed
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether an address is a valid IPv4 or IPv6 literal
    #[command(alias = "c")]
    Check { address: String },
    /// Look up geolocation details for a single address
    #[command(alias = "l")]
    Lookup {
        address: String,
        /// Print the record as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive lookup form (default)
    #[command(alias = "f")]
    Form,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
