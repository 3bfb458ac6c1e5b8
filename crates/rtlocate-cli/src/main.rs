mod completion;
mod dispatch;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rtlocate_core::RollForward;
use tracing_subscriber::EnvFilter;

use crate::completion::CliCompletionShell;
use crate::dispatch::run_cli;

#[derive(Parser, Debug)]
#[command(name = "rtlocate")]
#[command(
    about = "Select the installed .NET runtime that would load an application",
    long_about = None
)]
struct Cli {
    /// Log resolution decisions to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct DiscoveryArgs {
    /// `dotnet` executable whose install root is searched instead of auto-discovery.
    #[arg(long, value_name = "PATH")]
    dotnet: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ResolveArgs {
    /// Entry assembly; its `<name>.runtimeconfig.json` must sit next to it.
    dll: PathBuf,
    #[command(flatten)]
    discovery: DiscoveryArgs,
    /// Roll-forward policy; takes precedence over DOTNET_ROLL_FORWARD.
    #[arg(long, value_name = "POLICY")]
    roll_forward: Option<RollForward>,
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the directories to probe for assemblies, highest priority first.
    Select(ResolveArgs),
    /// Show the effective policy and the framework chosen for each requirement.
    Explain(ResolveArgs),
    /// List the host, SDKs and shared frameworks of the install root.
    Info {
        #[command(flatten)]
        discovery: DiscoveryArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: CliCompletionShell,
    },
    /// Print the rtlocate version.
    Version,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run_cli(cli)
}
