//! aether-remedy - automated remediation playbooks for AETHER.
//!
//! Lists and runs the remediation playbooks the AETHER diagnostics layer
//! triggers when the lighting installation misbehaves.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aether_remedy::playbook::discover_playbooks;
use aether_remedy::{ExecutionContext, HttpActionHandler, PlaybookRegistry, PlaybookRunner};

/// Automated remediation playbooks for the AETHER lighting control backend
#[derive(Parser)]
#[command(name = "aether-remedy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory of additional YAML playbooks to merge into the registry
    #[arg(long, global = true)]
    playbook_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered playbooks
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Run a playbook by id
    Run {
        /// Playbook id
        id: String,

        /// Confirm any confirmation-gated step
        #[arg(short = 'y', long)]
        confirmed: bool,

        /// Step index to resume from (from a previous needs_confirm outcome)
        #[arg(long, default_value_t = 0)]
        resume_from: usize,

        /// AETHER backend base URL
        #[arg(long, env = "AETHER_BACKEND_URL", default_value = "http://localhost:9000")]
        backend_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    let registry = build_registry(cli.playbook_dir.as_deref())?;

    match cli.command {
        Commands::List { format } => {
            cmd_list(&registry, &format)?;
        }
        Commands::Run { id, confirmed, resume_from, backend_url } => {
            cmd_run(registry, &id, ExecutionContext { confirmed, resume_from }, &backend_url)
                .await?;
        }
    }

    Ok(())
}

/// Build the registry: builtin playbooks plus any operator-authored ones.
fn build_registry(playbook_dir: Option<&std::path::Path>) -> Result<PlaybookRegistry> {
    let mut registry = PlaybookRegistry::builtin();

    if let Some(dir) = playbook_dir {
        let custom = discover_playbooks(dir)?;
        tracing::debug!(dir = ?dir, count = custom.len(), "Merging custom playbooks");
        registry.extend(custom)?;
    }

    Ok(registry)
}

/// List registered playbooks.
fn cmd_list(registry: &PlaybookRegistry, format: &str) -> Result<()> {
    let mut playbooks: Vec<_> = registry.iter().collect();
    playbooks.sort_by(|a, b| a.id.cmp(&b.id));

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&playbooks)?;
            println!("{json}");
        }
        _ => {
            for playbook in playbooks {
                println!(
                    "{:<20} trigger={:<20} risk={:<5} {} steps",
                    playbook.id,
                    playbook.trigger,
                    playbook.risk,
                    playbook.steps.len()
                );
            }
        }
    }

    Ok(())
}

/// Run one playbook invocation against the backend.
async fn cmd_run(
    registry: PlaybookRegistry,
    id: &str,
    ctx: ExecutionContext,
    backend_url: &str,
) -> Result<()> {
    let handler = HttpActionHandler::new(backend_url);
    let runner = PlaybookRunner::new(registry, handler);

    let outcome = runner.run(id, &ctx).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
