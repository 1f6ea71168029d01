//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate shipping and return, privacy, and terms documents for an online store.
#[derive(Debug, Parser)]
#[command(name = "storeterms", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Read configuration from this file instead of the user config directory
    #[arg(long, global = true, env = "STORETERMS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the selected documents from merchant details
    Generate(GenerateArgs),

    /// List the document templates and the placeholders they use
    Templates {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
}

/// Merchant details and output options for `generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// TOML file with merchant details; flags override its values
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Company name
    #[arg(long, env = "STORETERMS_COMPANY_NAME")]
    pub company_name: Option<String>,

    /// Website URL like example.com
    #[arg(long, env = "STORETERMS_WEBSITE_URL")]
    pub website_url: Option<String>,

    /// Jurisdiction (e.g., Dehradun, Uttarakhand)
    #[arg(long, env = "STORETERMS_JURISDICTION")]
    pub jurisdiction: Option<String>,

    /// Company contact email
    #[arg(long, env = "STORETERMS_CONTACT_EMAIL")]
    pub contact_email: Option<String>,

    /// Privacy compliance email
    #[arg(long, env = "STORETERMS_PRIVACY_EMAIL")]
    pub privacy_email: Option<String>,

    /// Refund timeframe in days
    #[arg(long, value_name = "DAYS", value_parser = clap::value_parser!(u32).range(1..=30))]
    pub refund_days: Option<u32>,

    /// Skip the shipping and return policy
    #[arg(long)]
    pub no_return_policy: bool,

    /// Skip the privacy policy
    #[arg(long)]
    pub no_privacy_policy: bool,

    /// Skip the terms and conditions
    #[arg(long)]
    pub no_terms: bool,

    /// "Last updated" date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Directory to write documents to
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print documents to stdout instead of writing files
    #[arg(long, conflicts_with_all = ["json", "page"])]
    pub stdout: bool,

    /// Also write a page with a collapsed view and download link per document
    #[arg(long)]
    pub page: bool,

    /// Print a JSON summary instead of plain text
    #[arg(long)]
    pub json: bool,
}
