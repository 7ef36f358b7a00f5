//! `cpmail` -- CLI binary for the cpmail email administration toolset.
//!
//! Provides the following subcommands:
//!
//! - `cpmail tools` -- List the available tools and their descriptions.
//! - `cpmail schemas` -- Print the function-calling schemas as JSON.
//! - `cpmail call <tool>` -- Invoke a tool with JSON arguments.
//!
//! Connection settings are read from the environment at startup
//! (`USERNAME`, `HOSTNAME`, `CPANEL_API_TOKEN`, and optionally `PORT`
//! and `SSL`); missing values fail before any tool can run.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cpmail_tools::registry::ToolRegistry;
use cpmail_uapi::EmailApi;

/// cPanel email administration CLI.
#[derive(Parser)]
#[command(name = "cpmail", about = "cPanel email administration CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the available tools and their descriptions.
    Tools,

    /// Print the function-calling schemas as JSON.
    Schemas,

    /// Invoke a tool by name.
    Call {
        /// Name of the tool to invoke (e.g. "list_email_accounts").
        tool: String,

        /// Tool arguments as a JSON object.
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

fn build_registry() -> anyhow::Result<ToolRegistry> {
    let api = Arc::new(EmailApi::from_env().context("failed to load cPanel connection settings")?);
    let mut registry = ToolRegistry::new();
    cpmail_tools::register_all(&mut registry, api);
    Ok(registry)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let registry = build_registry()?;

    match cli.command {
        Commands::Tools => {
            for name in registry.list() {
                if let Some(tool) = registry.get(&name) {
                    println!("{name}\n    {}", tool.description());
                }
            }
        }
        Commands::Schemas => {
            println!("{}", serde_json::to_string_pretty(&registry.schemas())?);
        }
        Commands::Call { tool, args } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;

            tracing::debug!(tool = %tool, "invoking tool");
            let result = registry.execute(&tool, args).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
