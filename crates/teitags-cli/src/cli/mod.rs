//! CLI for teitags.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use teitags_core::config::{self, TeiConfig};

use commands::{run_completions, run_count, run_fetch, run_script};

/// Top-level CLI for teitags.
#[derive(Debug, Parser)]
#[command(name = "teitags")]
#[command(about = "Count TEI/XML element tags and render a checklist script", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG default.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a remote document to local disk.
    Fetch {
        /// HTTP/HTTPS (or file://) URL to download.
        url: String,
        /// Destination path; defaults to the URL's file name in the current directory.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Print element tag frequencies of an XML file.
    Count {
        /// Path to the XML file.
        path: PathBuf,
        /// Fetch this URL to `path` before counting.
        #[arg(long)]
        url: Option<String>,
        /// Row order.
        #[arg(long, value_enum, default_value_t = SortOrder::Count)]
        sort: SortOrder,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the checkbox-ticking JavaScript for the tags of an XML file.
    Script {
        /// Path to the XML file.
        path: PathBuf,
        /// Fetch this URL to `path` before counting.
        #[arg(long)]
        url: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Highest count first; ties in document order.
    Count,
    /// Tag name ascending.
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url, out } => run_fetch(&cfg, &url, out)?,
            CliCommand::Count {
                path,
                url,
                sort,
                format,
            } => run_count(&cfg, &path, url.as_deref(), sort, format)?,
            CliCommand::Script { path, url } => run_script(&cfg, &path, url.as_deref())?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<TeiConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
