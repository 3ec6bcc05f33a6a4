mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use supa_core::driver::InstallOptions;
use supa_core::retrieve::CleanupPolicy;

#[derive(Parser)]
#[command(
    name = "supa",
    about = "SupaBMADFloSho unified installer — merge BMAD-METHOD, xText-PRP, and SuperClaude into one workspace",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root to install into (default: current directory)
    #[arg(long, global = true, env = "SUPA_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON (supa check only)
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full install sequence (default when no subcommand is given)
    Install {
        /// Skip retrieval; use staging trees under temp/ as-is
        #[arg(long)]
        offline: bool,

        /// Keep the staging area after a successful install
        #[arg(long)]
        keep_staging: bool,

        /// Treat a staging-cleanup failure as fatal
        #[arg(long)]
        strict_cleanup: bool,

        /// Trust the environment; skip the external-tool probes
        #[arg(long)]
        skip_preflight: bool,
    },

    /// Probe for required external tools and report readiness
    Check,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let result = match cli.command {
        Some(Commands::Check) => cmd::check::run(cli.json),
        Some(Commands::Install {
            offline,
            keep_staging,
            strict_cleanup,
            skip_preflight,
        }) => cmd::install::run(
            &root,
            InstallOptions {
                offline,
                keep_staging,
                skip_preflight,
                cleanup: if strict_cleanup {
                    CleanupPolicy::Strict
                } else {
                    CleanupPolicy::Lenient
                },
            },
        ),
        None => cmd::install::run(&root, InstallOptions::default()),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
