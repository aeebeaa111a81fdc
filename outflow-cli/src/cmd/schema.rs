//! Print the config schema of a data source.

use anyhow::{bail, Context, Result};
use structopt::StructOpt;

use outflow_provider::datasource::DataSource;

/// Print the config schema of a data source as JSON.
#[derive(StructOpt)]
#[structopt(name = "schema")]
pub struct Schema {
    /// The name of the data source.
    datasource: String,
}

impl Schema {
    pub fn run(&self) -> Result<()> {
        let ds = match DataSource::from_name(&self.datasource) {
            Some(ds) => ds,
            None => bail!("unknown data source `{}`", self.datasource),
        };
        let schema = serde_json::to_string_pretty(ds.schema()).context("error serializing schema")?;
        println!("{}", schema);
        Ok(())
    }
}
