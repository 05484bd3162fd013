mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "supplierdb-cli")]
#[command(about = "Manage supplier contact records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every supplier
    List,
    /// Show one supplier with each phone on its own line
    Show {
        /// Supplier id
        id: String,
    },
    /// Register a new supplier
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Phone number; repeat for several
        #[arg(long = "phone", required = true)]
        phones: Vec<String>,
        /// Fabricante, Atacadista, Distribuidor or Varejista
        #[arg(long = "type")]
        supplier_type: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Update an existing supplier; omitted fields keep their current value
    Update {
        /// Supplier id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replaces all phones; repeat for several
        #[arg(long = "phone")]
        phones: Vec<String>,
        #[arg(long = "type")]
        supplier_type: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a supplier after confirmation
    Delete {
        /// Supplier id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `--help` and usage errors must not depend on the environment.
    let cli = Cli::parse();
    let config = supplierdb_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, api_url = %config.api_url, "configuration loaded");

    let ctx = commands::Context::from_config(&config)?;
    match cli.command {
        Commands::List => commands::run_list(&ctx).await,
        Commands::Show { id } => commands::run_show(&ctx, &id).await,
        Commands::Create {
            name,
            email,
            phones,
            supplier_type,
            note,
        } => {
            let edits = commands::FormEdits {
                name: Some(name),
                email: Some(email),
                phones,
                supplier_type: Some(supplier_type),
                note: Some(note),
            };
            commands::run_create(ctx, edits).await
        }
        Commands::Update {
            id,
            name,
            email,
            phones,
            supplier_type,
            note,
        } => {
            let edits = commands::FormEdits {
                name,
                email,
                phones,
                supplier_type,
                note,
            };
            commands::run_update(ctx, &id, edits).await
        }
        Commands::Delete { id, yes } => commands::run_delete(&ctx, &id, yes).await,
    }
}

#[cfg(test)]
mod tests;
