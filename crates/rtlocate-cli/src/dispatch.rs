use std::path::PathBuf;

use anyhow::{Context, Result};
use rtlocate_core::{DotnetEnvironmentInfo, LocateError, RollForward, RuntimeVersion};
use rtlocate_discovery::{
    default_install_roots, enumerate_environment, locate_dotnet_root, DOTNET_ROOT_ENV,
};
use rtlocate_resolver::{
    resolve_for_dll, DllResolution, RollForwardOverrides, Selection, ROLL_FORWARD_ENV,
};
use serde::Serialize;

use crate::completion::write_completions_script;
use crate::render::{
    current_output_style, format_explain_lines, format_info_lines, format_probe_lines,
};
use crate::{Cli, Commands, DiscoveryArgs, ResolveArgs};

#[derive(Debug, Serialize)]
pub(crate) struct ExplainReport {
    pub(crate) app_dir: PathBuf,
    pub(crate) roll_forward: RollForward,
    pub(crate) frameworks: Vec<ExplainFramework>,
    pub(crate) probe_directories: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExplainFramework {
    pub(crate) name: String,
    pub(crate) requested: RuntimeVersion,
    pub(crate) selected: Option<String>,
    pub(crate) install_dir: Option<PathBuf>,
}

impl From<&DllResolution> for ExplainReport {
    fn from(resolution: &DllResolution) -> Self {
        let frameworks = resolution
            .frameworks
            .iter()
            .map(|framework| {
                let (selected, install_dir) = match &framework.selection {
                    Selection::Framework(installed) => {
                        (Some(installed.version.clone()), Some(installed.install_dir()))
                    }
                    Selection::Absent => (None, None),
                };
                ExplainFramework {
                    name: framework.desired.name.clone(),
                    requested: framework.desired.version,
                    selected,
                    install_dir,
                }
            })
            .collect();

        Self {
            app_dir: resolution.app_dir.clone(),
            roll_forward: resolution.roll_forward,
            frameworks,
            probe_directories: resolution.probe_directories.clone(),
        }
    }
}

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Select(args) => {
            let resolution = run_resolution(&args)?;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&resolution.probe_directories)
                        .context("failed to render probe directories as JSON")?
                );
            } else {
                for line in format_probe_lines(&resolution.probe_directories) {
                    println!("{line}");
                }
            }
        }
        Commands::Explain(args) => {
            let resolution = run_resolution(&args)?;
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ExplainReport::from(&resolution))
                        .context("failed to render resolution report as JSON")?
                );
            } else {
                for line in format_explain_lines(&resolution, current_output_style()) {
                    println!("{line}");
                }
            }
        }
        Commands::Info { discovery, json } => {
            let info =
                load_environment(&discovery).context("failed to enumerate installed runtimes")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&info)
                        .context("failed to render environment info as JSON")?
                );
            } else {
                for line in format_info_lines(&info, current_output_style()) {
                    println!("{line}");
                }
            }
        }
        Commands::Completions { shell } => {
            let mut stdout = std::io::stdout();
            write_completions_script(shell, &mut stdout)?;
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

pub(crate) fn roll_forward_overrides(
    command_line: Option<RollForward>,
    environment: Option<std::ffi::OsString>,
) -> RollForwardOverrides {
    RollForwardOverrides {
        command_line,
        environment: environment.map(|value| value.to_string_lossy().into_owned()),
    }
}

fn run_resolution(args: &ResolveArgs) -> Result<DllResolution> {
    let overrides =
        roll_forward_overrides(args.roll_forward, std::env::var_os(ROLL_FORWARD_ENV));
    resolve_for_dll(&args.dll, &overrides, || load_environment(&args.discovery))
        .with_context(|| format!("failed to select a runtime for {}", args.dll.display()))
}

fn load_environment(discovery: &DiscoveryArgs) -> Result<DotnetEnvironmentInfo, LocateError> {
    let dotnet_root = std::env::var_os(DOTNET_ROOT_ENV);
    let path_var = std::env::var_os("PATH");
    let layout = locate_dotnet_root(
        discovery.dotnet.as_deref(),
        dotnet_root.as_deref(),
        path_var.as_deref(),
        &default_install_roots(),
    )?;
    enumerate_environment(&layout)
}
