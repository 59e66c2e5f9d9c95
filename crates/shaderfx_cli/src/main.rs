// SPDX-License-Identifier: MIT OR Apache-2.0
//! ShaderFX command line harness.
//!
//! Talks to a running host over its command port:
//!   shaderfx inspect <shader> [--json]
//!   shaderfx layout <shader>
//!   shaderfx create <name> [--flavor sfx|pbs] [--from <file>]
//!   shaderfx catalog --shader <shader> [--flavor sfx|pbs] [--names <file>] [--output <file>]

mod catalog_gen;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use shaderfx_graph::channel::{shared, CommandPortChannel};
use shaderfx_graph::{ChannelError, Flavor, GraphError, Network, NetworkSettings, Session, SharedChannel};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "shaderfx", version, about = "Inspect and edit ShaderFX shader networks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Settings file (RON)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every node of a shader network and its input connections
    Inspect {
        /// Shader object name
        shader: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Arrange a shader network in columns by depth from the root
    Layout {
        /// Shader object name
        shader: String,
    },
    /// Create a shader object with its default graph
    Create {
        /// Requested name; the host may rename it
        name: String,
        /// Network flavor
        #[arg(long, value_enum, default_value_t = FlavorArg::Sfx)]
        flavor: FlavorArg,
        /// Graph file to load into the new shader
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Regenerate the node type catalog from the host
    Catalog {
        /// Existing shader object to issue queries through
        #[arg(long)]
        shader: String,
        /// Network flavor
        #[arg(long, value_enum, default_value_t = FlavorArg::Sfx)]
        flavor: FlavorArg,
        /// Class names to query, one per line; defaults to the built-in list
        #[arg(long)]
        names: Option<PathBuf>,
        /// Catalog file to write; printed to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FlavorArg {
    /// Vanilla ShaderFX
    Sfx,
    /// Stingray PBS
    Pbs,
}

impl From<FlavorArg> for Flavor {
    fn from(arg: FlavorArg) -> Self {
        match arg {
            FlavorArg::Sfx => Flavor::ShaderFx,
            FlavorArg::Pbs => Flavor::StingrayPbs,
        }
    }
}

/// Errors surfaced to the command line
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
}

fn file_error(path: &Path) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |source| CliError::File {
        path: path.to_path_buf(),
        source,
    }
}

fn load_settings(path: Option<&Path>) -> Result<NetworkSettings, CliError> {
    match path {
        Some(path) => NetworkSettings::load(path).map_err(file_error(path)),
        None => Ok(NetworkSettings::default()),
    }
}

fn run(command: Commands, channel: SharedChannel, settings: NetworkSettings) -> Result<(), CliError> {
    match command {
        Commands::Inspect { shader, json } => {
            let network = Network::discover_with(Session::bind(channel, shader), settings)?;
            let report = report::NetworkReport::build(&network)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Commands::Layout { shader } => {
            let network = Network::discover_with(Session::bind(channel, shader), settings)?;
            let placed = network.layout()?;
            println!("Laid out {placed} nodes in {}", network.shader());
        }
        Commands::Create { name, flavor, from } => {
            let network = match from {
                Some(path) => Network::instantiate_with(channel, &name, flavor.into(), &path, settings)?,
                None => Network::create_with(channel, &name, flavor.into(), settings)?,
            };
            println!("{network}");
        }
        Commands::Catalog {
            shader,
            flavor,
            names,
            output,
        } => {
            let flavor = Flavor::from(flavor);
            let list = match &names {
                Some(path) => Some(std::fs::read_to_string(path).map_err(file_error(path))?),
                None => None,
            };
            let names = catalog_gen::class_names(flavor, list.as_deref());
            let generated = catalog_gen::generate(&Session::bind(channel, shader), flavor, &names)?;

            for name in &generated.rejected {
                tracing::warn!("Host does not know class {name}");
            }
            match output {
                Some(path) => {
                    generated.catalog.save(&path).map_err(file_error(&path))?;
                    println!("Wrote {} types to {}", generated.catalog.len(), path.display());
                }
                None => println!("{}", generated.catalog.to_ron()?),
            }
        }
    }
    Ok(())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("shaderfx=info".parse().unwrap())
        .add_directive("shaderfx_graph=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = load_settings(cli.settings.as_deref()).and_then(|settings| {
        let channel = CommandPortChannel::from_settings(&settings.command_port)?;
        run(cli.command, shared(channel), settings)
    });

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaderfx_graph::channel::MemoryHost;
    use shaderfx_graph::CommandChannel;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["shaderfx", "create", "example", "--flavor", "pbs"]).unwrap();
        match cli.command {
            Commands::Create { name, flavor, from } => {
                assert_eq!(name, "example");
                assert_eq!(Flavor::from(flavor), Flavor::StingrayPbs);
                assert!(from.is_none());
            }
            _ => panic!("expected create"),
        }

        let cli = Cli::try_parse_from(["shaderfx", "inspect", "shader1", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Inspect { json: true, .. }));
        assert!(Cli::try_parse_from(["shaderfx", "catalog"]).is_err());
    }

    #[test]
    fn test_run_create_and_layout() {
        let host = std::sync::Arc::new(parking_lot::Mutex::new(MemoryHost::new()));
        let create = Commands::Create {
            name: "example".to_string(),
            flavor: FlavorArg::Sfx,
            from: None,
        };
        run(create, host.clone(), NetworkSettings::default()).unwrap();
        run(
            Commands::Layout {
                shader: "example".to_string(),
            },
            host.clone(),
            NetworkSettings::default(),
        )
        .unwrap();
        assert!(host.lock().graph("example").is_some());
    }

    #[test]
    fn test_run_catalog_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("pbs.ron");
        let mut host = MemoryHost::new();
        let shader = host.create_shader("probe", Flavor::StingrayPbs).unwrap();

        let catalog = Commands::Catalog {
            shader,
            flavor: FlavorArg::Pbs,
            names: None,
            output: Some(output.clone()),
        };
        run(catalog, shared(host), NetworkSettings::default()).unwrap();
        let loaded = shaderfx_graph::Catalog::load(&output).unwrap();
        assert_eq!(loaded.flavor, Flavor::StingrayPbs);
        assert!(loaded.by_name("Material Variable").is_some());
    }

    #[test]
    fn test_missing_settings_file_is_reported() {
        let err = load_settings(Some(Path::new("/nonexistent/shaderfx.ron"))).unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/shaderfx.ron"));
    }
}
