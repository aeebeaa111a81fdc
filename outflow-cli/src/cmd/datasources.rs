//! List the registered data sources.

use anyhow::Result;
use structopt::StructOpt;

use outflow_provider::datasource::DataSource;

/// List the registered data sources, one per line.
#[derive(StructOpt)]
#[structopt(name = "datasources")]
pub struct Datasources {}

impl Datasources {
    pub fn run(&self) -> Result<()> {
        for ds in DataSource::ALL {
            println!("{}", ds.name());
        }
        Ok(())
    }
}
