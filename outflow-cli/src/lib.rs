//! The Outflow CLI.

mod cmd;

use anyhow::Result;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// The Outflow CLI.
#[derive(StructOpt)]
#[structopt(name = "outflow")]
pub struct Outflow {
    #[structopt(subcommand)]
    action: OutflowSubcommands,
    /// Enable debug logging.
    #[structopt(short)]
    verbose: bool,
}

impl Outflow {
    pub fn run(self) -> Result<()> {
        // Initialize logging based on CLI config. Logs go to stderr so that
        // rendered manifests on stdout stay clean for piping.
        let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
        let filter_layer;
        let level_filter;
        if self.verbose {
            filter_layer = EnvFilter::new("debug");
            level_filter = LevelFilter::DEBUG;
        } else {
            filter_layer = EnvFilter::new("info");
            level_filter = LevelFilter::INFO;
        }
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(level_filter)
            .init();

        match &self.action {
            OutflowSubcommands::Datasources(inner) => inner.run(),
            OutflowSubcommands::Render(inner) => inner.run(),
            OutflowSubcommands::Schema(inner) => inner.run(),
        }
    }
}

#[derive(StructOpt)]
pub enum OutflowSubcommands {
    /// List the registered data sources.
    #[structopt(name = "datasources")]
    Datasources(cmd::datasources::Datasources),
    /// Render a config document into a YAML manifest.
    #[structopt(name = "render")]
    Render(cmd::render::Render),
    /// Print the config schema of a data source.
    #[structopt(name = "schema")]
    Schema(cmd::schema::Schema),
}
