//! Toggles CLI
//!
//! The `toggle` command reports which feature toggles are enabled for a
//! build identity.
//!
//! ## Commands
//!
//! - `identity`: Print the identity of this build
//! - `eval`: Evaluate an ad-hoc activation set
//! - `check`: Evaluate one named toggle from a catalog
//! - `list`: Evaluate every toggle in a catalog

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, Level};

use toggle_core::{resolve_current, BuildIdentity, Toggle, ToggleCatalog};

#[derive(Parser)]
#[command(name = "toggle")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect build-identity feature toggles", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the build identity this binary was compiled as
    Identity,

    /// Evaluate an activation set against a build identity
    Eval {
        /// Identities the feature is enabled in (comma separated, may be empty)
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        enabled_in: Vec<BuildIdentity>,

        /// Evaluate against this identity instead of the running build's
        #[arg(long)]
        identity: Option<BuildIdentity>,
    },

    /// Evaluate a single named toggle
    Check {
        /// Toggle name
        name: String,

        /// Catalog file (JSON); the built-in catalog is used when omitted
        #[arg(long, env = "TOGGLE_CATALOG")]
        catalog: Option<PathBuf>,

        /// Evaluate against this identity instead of the running build's
        #[arg(long)]
        identity: Option<BuildIdentity>,
    },

    /// Evaluate every toggle in a catalog
    List {
        /// Catalog file (JSON); the built-in catalog is used when omitted
        #[arg(long, env = "TOGGLE_CATALOG")]
        catalog: Option<PathBuf>,

        /// Evaluate against this identity instead of the running build's
        #[arg(long)]
        identity: Option<BuildIdentity>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct ListReport {
    identity: BuildIdentity,
    toggles: std::collections::BTreeMap<String, bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    toggle_core::init_tracing(cli.json, level);

    let output = run(cli.command)?;
    println!("{output}");
    Ok(())
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Identity => Ok(cmd_identity()),
        Commands::Eval {
            enabled_in,
            identity,
        } => Ok(cmd_eval(enabled_in, identity)),
        Commands::Check {
            name,
            catalog,
            identity,
        } => cmd_check(&name, catalog.as_deref(), identity),
        Commands::List {
            catalog,
            identity,
            format,
        } => cmd_list(catalog.as_deref(), identity, format),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<ToggleCatalog> {
    match path {
        Some(path) => ToggleCatalog::load(path)
            .with_context(|| format!("Failed to load toggle catalog {}", path.display())),
        None => {
            debug!("using built-in toggle catalog");
            Ok(ToggleCatalog::builtin())
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn cmd_identity() -> String {
    resolve_current().to_string()
}

fn cmd_eval(enabled_in: Vec<BuildIdentity>, identity: Option<BuildIdentity>) -> String {
    let toggle = Toggle::new(enabled_in, identity.unwrap_or_else(resolve_current));
    toggle.enabled().to_string()
}

fn cmd_check(name: &str, catalog: Option<&Path>, identity: Option<BuildIdentity>) -> Result<String> {
    let catalog = load_catalog(catalog)?;
    let identity = identity.unwrap_or_else(resolve_current);
    let toggle = catalog
        .toggle(name, identity)
        .with_context(|| format!("Cannot evaluate toggle '{name}'"))?;
    Ok(format!("{name}: {}", on_off(toggle.enabled())))
}

fn cmd_list(
    catalog: Option<&Path>,
    identity: Option<BuildIdentity>,
    format: OutputFormat,
) -> Result<String> {
    let catalog = load_catalog(catalog)?;
    let identity = identity.unwrap_or_else(resolve_current);
    let toggles = catalog.evaluate_all(identity);

    match format {
        OutputFormat::Json => {
            let report = ListReport { identity, toggles };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => {
            if toggles.is_empty() {
                return Ok(format!("No toggles defined ({identity})"));
            }
            let width = toggles.keys().map(String::len).max().unwrap_or(0);
            let mut lines = vec![format!("Toggles for {identity}:")];
            lines.extend(
                toggles
                    .iter()
                    .map(|(name, enabled)| format!("  {name:<width$}  {}", on_off(*enabled))),
            );
            Ok(lines.join("\n"))
        }
    }
}
