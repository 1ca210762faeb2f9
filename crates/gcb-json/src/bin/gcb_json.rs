//! `gcb-json`: inspect Cloud Build JSON with the same parser the service uses.
//!
//! Reads a document from a file argument or stdin and writes the result to
//! stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gcb_json::commands::{self, DocumentKind};
use gcb_json::GcbSettings;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gcb-json", version, about = "Parse and re-encode Google Cloud Build JSON")]
struct Cli {
    /// TOML file with a `[gcb]` table; `GCB_ENABLED` overrides it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a document and print its canonical encoding.
    Normalize {
        #[arg(long, value_enum, default_value_t = Kind::Build)]
        kind: Kind,
        /// Input file; stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Print the build embedded in an operation's metadata.
    OperationBuild { input: Option<PathBuf> },
    /// Print `<id> <STATUS> complete=<bool>` for a build.
    Status { input: Option<PathBuf> },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Build,
    Operation,
}

impl From<Kind> for DocumentKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Build => DocumentKind::Build,
            Kind::Operation => DocumentKind::Operation,
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => GcbSettings::from_path(path)?,
        None => GcbSettings::default(),
    }
    .with_env_override()?;
    let Some(shared) = settings.activate() else {
        bail!("google cloud build support is disabled (set gcb.enabled or GCB_ENABLED=true)");
    };
    let parser = &*shared;

    let output = match &cli.command {
        Command::Normalize { kind, input } => {
            let text = read_input(input.as_ref())?;
            commands::normalize(parser, &text, (*kind).into())?
        }
        Command::OperationBuild { input } => {
            let text = read_input(input.as_ref())?;
            let build = commands::operation_build(parser, &text)?
                .context("operation carries no build metadata")?;
            parser.serialize(&build)?
        }
        Command::Status { input } => {
            let text = read_input(input.as_ref())?;
            commands::status_line(parser, &text)?
        }
    };
    println!("{output}");
    Ok(())
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("gcb-json: {err:#}");
        std::process::exit(1);
    }
}
