mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gqltoast")]
#[command(about = "Turn GraphQL client errors into user-facing toast messages")]
struct Cli {
    /// Output format: text, table or json
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// TOML config file (defaults to $GQLTOAST_CONFIG, then built-in messages)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify error envelopes and print the toast for each
    Classify(commands::classify::ClassifyArgs),
    /// Render a `{name}` template with key=value pairs
    Render(commands::render::RenderArgs),
    /// Show version, active config and a decoder self-check
    Diagnose,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gqltoast=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "table" => OutputFormat::Table,
        _ => OutputFormat::Text,
    };

    match &cli.command {
        Commands::Classify(args) => {
            let (config, _) = commands::load_config(cli.config.as_deref())?;
            commands::classify::run(args, &config, &format)?
        }
        Commands::Render(args) => commands::render::run(args, &format)?,
        Commands::Diagnose => {
            let (config, source) = commands::load_config(cli.config.as_deref())?;
            commands::diagnose::run(&config, &source, &format)
        }
    }

    Ok(())
}
