//! cfgkit: command-line access to sectioned `key: value` configuration files.
//!
//! # Usage
//!
//! ```text
//! cfgkit --file <PATH> <COMMAND>
//!
//! Commands:
//!   get   <SECTION> <KEY>           Print one value
//!   set   <SECTION> <KEY> <VALUE>   Store a value and rewrite the file
//!   check                           Validate the file and print counts
//!   dump  [--json]                  Print the canonical file text (or JSON)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable      | Description                                  |
//! |---------------|----------------------------------------------|
//! | `CFGKIT_FILE` | Default for `--file`                         |
//! | `RUST_LOG`    | Log filter for stderr output (default `warn`) |

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cfgkit_core::{Configuration, FileStore, WriteStrategy};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read and write sectioned `key: value` configuration files.
#[derive(Debug, Parser)]
#[command(name = "cfgkit", version)]
struct Cli {
    /// Configuration file to operate on.
    #[arg(long, short, env = "CFGKIT_FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value stored at SECTION / KEY.
    Get { section: String, key: String },

    /// Store VALUE at SECTION / KEY and rewrite the file.
    ///
    /// The file is created if it does not exist yet.
    Set {
        section: String,
        key: String,
        value: String,
        /// Write through a temporary file and rename it over the target.
        #[arg(long)]
        atomic: bool,
    },

    /// Validate the file and print its section and entry counts.
    Check,

    /// Print the file in canonical form.
    Dump {
        /// Print an ordered JSON object instead.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Executes the parsed command, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or written, if it is
    /// malformed, or if the requested entry does not exist.
    fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let path = self.file;
        debug!(path = %path.display(), command = ?self.command, "running command");

        match self.command {
            Command::Get { section, key } => {
                let config = open(&path)?;
                let value = config
                    .get((&section, &key))
                    .with_context(|| format!("cannot read [{section}] {key}"))?;
                writeln!(out, "{value}")?;
            }
            Command::Set {
                section,
                key,
                value,
                atomic,
            } => {
                let strategy = if atomic {
                    WriteStrategy::Atomic
                } else {
                    WriteStrategy::InPlace
                };
                let store = FileStore::new(&path).with_strategy(strategy);
                let mut config = Configuration::with_store_or_empty(store)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                config
                    .set((&section, &key), &value)
                    .with_context(|| format!("cannot write [{section}] {key}"))?;
            }
            Command::Check => {
                let config = open(&path)?;
                let doc = config.document();
                writeln!(
                    out,
                    "{}: ok ({} sections, {} entries)",
                    path.display(),
                    doc.len(),
                    doc.entry_count()
                )?;
            }
            Command::Dump { json } => {
                let config = open(&path)?;
                if json {
                    let rendered = serde_json::to_string_pretty(config.document())?;
                    writeln!(out, "{rendered}")?;
                } else {
                    write!(out, "{}", config.document())?;
                }
            }
        }

        Ok(())
    }
}

fn open(path: &Path) -> anyhow::Result<Configuration> {
    Configuration::open(path).with_context(|| format!("failed to load {}", path.display()))
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so that stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    cli.run(&mut stdout.lock())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
