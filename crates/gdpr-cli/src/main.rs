mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use gdpr_config::Config;

fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry the redacted file
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        cli::Commands::Obfuscate(args) => {
            let config = Config::load_or_init(&config_path)?;
            commands::obfuscate::handle(args, &config)
        }
        cli::Commands::Config(cmd) => commands::config::handle(cmd, &config_path),
    }
}
