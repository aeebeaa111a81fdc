//! Render a config document into a YAML manifest.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use structopt::StructOpt;

use outflow_provider::datasource::{has_errors, DataSource, Diagnostic};

/// Render a config document into a YAML manifest.
///
/// The config document is read from the given file, which may be YAML or
/// JSON, and is evaluated against the named data source. The rendered
/// manifest is written to stdout, or to the path given via `--output`.
#[derive(StructOpt)]
#[structopt(name = "render")]
pub struct Render {
    /// The path of the config document to render.
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    file: PathBuf,
    /// Write the manifest to the given path instead of stdout.
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// The name of the data source to render with.
    datasource: String,
}

impl Render {
    pub fn run(&self) -> Result<()> {
        let ds = match DataSource::from_name(&self.datasource) {
            Some(ds) => ds,
            None => bail!("unknown data source `{}`", self.datasource),
        };
        let raw = std::fs::read_to_string(&self.file)
            .with_context(|| format!("error reading config file {:?}", self.file))?;
        let config: Value = serde_yaml::from_str(&raw)
            .with_context(|| format!("error parsing config file {:?}", self.file))?;

        let res = ds.read(&config);
        report(&res.diagnostics);
        let yaml = match res.yaml {
            Some(yaml) if !has_errors(&res.diagnostics) => yaml,
            _ => bail!("config for data source `{}` did not produce a manifest", self.datasource),
        };
        if let Some(id) = &res.id {
            tracing::debug!("rendered manifest {}", id);
        }
        match &self.output {
            Some(path) => {
                std::fs::write(path, yaml.as_bytes())
                    .with_context(|| format!("error writing manifest to {:?}", path))?;
                tracing::info!("manifest written to {}", path.display());
            }
            None => print!("{}", yaml),
        }
        Ok(())
    }
}

/// Log the given diagnostics, errors and warnings each at their own level.
fn report(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        let attribute = diag.attribute.as_deref().unwrap_or("<config>");
        let message = match &diag.detail {
            Some(detail) => format!("{}: {}", diag.summary, detail),
            None => diag.summary.clone(),
        };
        if diag.is_error() {
            tracing::error!(attribute = %attribute, "{}", message);
        } else {
            tracing::warn!(attribute = %attribute, "{}", message);
        }
    }
}
