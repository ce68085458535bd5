use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gdpr-obfuscator")]
#[command(about = "Redact PII fields from CSV, JSON and Parquet files in S3", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true, env = "GDPR_OBFUSCATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact fields from a file and write the result
    Obfuscate(ObfuscateArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct ObfuscateArgs {
    /// JSON request, e.g. '{"file_to_obfuscate": "s3://bucket/key.csv", "pii_fields": ["name"]}'
    #[arg(long, conflicts_with_all = ["request_file", "location"])]
    pub request: Option<String>,

    /// Read the JSON request from a file ("-" for stdin)
    #[arg(long, conflicts_with = "location")]
    pub request_file: Option<PathBuf>,

    /// S3 URL of the file to obfuscate (s3://bucket/key)
    #[arg(long)]
    pub location: Option<String>,

    /// Field to redact (repeatable; defaults from config)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,

    /// Output path, s3:// URL (written back to the store), or "-" for stdout
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Print the redaction report as JSON
    #[arg(long)]
    pub report: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
